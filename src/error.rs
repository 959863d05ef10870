// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Node {0} already exists")]
    DuplicateNode(String),

    #[error("Node {0} not found")]
    UnknownNode(String),

    #[error("Edge ({from},{to}) already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge ({from},{to}) not found")]
    UnknownEdge { from: String, to: String },

    #[error("Self-loops are not allowed in undirected graphs (node {0})")]
    SelfLoop(String),

    #[error("Cannot rank an empty graph")]
    EmptyGraph,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Rank vector has {found} entries but the graph has {expected} nodes")]
    RankMismatch { expected: usize, found: usize },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {source} (path: {path})")]
    Csv { source: csv::Error, path: PathBuf },

    #[error("Malformed table {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RankError {
    /// True for errors caused by the caller's input rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Io { .. } => false,
            Self::Csv { source, .. } => !source.is_io_error(),
            _ => true,
        }
    }

    pub(crate) fn csv_at(source: csv::Error, path: impl Into<PathBuf>) -> Self {
        Self::Csv {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
