// src/config/io.rs
//! Reading `walkrank.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::types::{Config, WalkrankToml};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "walkrank.toml";

/// Applies the file at `path` onto `config`. A missing file leaves the
/// config untouched.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, path: &Path) -> Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(RankError::io_at(e, path)),
    };
    parse_toml(config, &content)
}

/// # Errors
/// Returns error on malformed TOML or mistyped fields.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: WalkrankToml = toml::from_str(content)?;
    config.pagerank = parsed.pagerank;
    config.output = parsed.output;
    Ok(())
}
