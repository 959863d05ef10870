// src/loader/mod.rs
//! CSV loading of node and edge tables.
//!
//! Both tables need a header row.
//!
//! - Node table: `id, attr1, attr2, ...`
//! - Edge table: `source, target, attr1, ...`
//!
//! Header names after the key columns become attribute names. Cells are
//! interpreted with [`AttrValue::parse_cell`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{RankError, Result};
use crate::graph::{AttrValue, Attributes, Graph, GraphKind};

const READER_PATH: &str = "<reader>";

/// Builds a graph from a node file and an edge file.
///
/// # Errors
/// `Io` if a file cannot be opened, `Csv` / `MalformedTable` for bad tables,
/// and graph construction errors (`DuplicateNode`, `UnknownNode`,
/// `DuplicateEdge`, `SelfLoop`) for bad rows. The first error aborts the load.
pub fn read_graph_from_csv(
    node_path: impl AsRef<Path>,
    edge_path: impl AsRef<Path>,
    kind: GraphKind,
) -> Result<Graph<String>> {
    let node_path = node_path.as_ref();
    let edge_path = edge_path.as_ref();
    let mut graph = Graph::new(kind);

    let nodes = File::open(node_path).map_err(|e| RankError::io_at(e, node_path))?;
    read_nodes(&mut graph, nodes, node_path)?;

    let edges = File::open(edge_path).map_err(|e| RankError::io_at(e, edge_path))?;
    read_edges(&mut graph, edges, edge_path)?;

    Ok(graph)
}

/// Adds every row of a node table to `graph`.
///
/// # Errors
/// See [`read_graph_from_csv`].
pub fn load_nodes<R: Read>(graph: &mut Graph<String>, reader: R) -> Result<usize> {
    read_nodes(graph, reader, Path::new(READER_PATH))
}

/// Adds every row of an edge table to `graph`.
///
/// # Errors
/// See [`read_graph_from_csv`].
pub fn load_edges<R: Read>(graph: &mut Graph<String>, reader: R) -> Result<usize> {
    read_edges(graph, reader, Path::new(READER_PATH))
}

fn read_nodes<R: Read>(graph: &mut Graph<String>, reader: R, path: &Path) -> Result<usize> {
    let mut count = 0;
    for row in table_rows(reader, path, 1)? {
        let mut row = row?;
        let id = row.keys.remove(0);
        graph.add_node(id, row.attributes)?;
        count += 1;
    }
    debug!(path = %path.display(), nodes = count, "loaded node table");
    Ok(count)
}

fn read_edges<R: Read>(graph: &mut Graph<String>, reader: R, path: &Path) -> Result<usize> {
    let mut count = 0;
    for row in table_rows(reader, path, 2)? {
        let Row { mut keys, attributes } = row?;
        let target = keys.pop().unwrap_or_default();
        let source = keys.pop().unwrap_or_default();
        graph.add_edge(source, target, attributes)?;
        count += 1;
    }
    debug!(path = %path.display(), edges = count, "loaded edge table");
    Ok(count)
}

/// One parsed row: leading key columns plus the attribute map.
struct Row {
    keys: Vec<String>,
    attributes: Attributes,
}

/// Reads the header, checks it has at least `key_columns` columns, and
/// yields the remaining rows.
fn table_rows<'p, R: Read + 'p>(
    reader: R,
    path: &'p Path,
    key_columns: usize,
) -> Result<impl Iterator<Item = Result<Row>> + 'p> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| RankError::csv_at(e, path))?
        .clone();
    if headers.len() < key_columns {
        return Err(RankError::MalformedTable {
            path: path.to_path_buf(),
            reason: format!(
                "expected at least {key_columns} column(s), header has {}",
                headers.len()
            ),
        });
    }
    let names: Vec<String> = headers.iter().skip(key_columns).map(String::from).collect();

    Ok(rdr.into_records().map(move |record| {
        let record = record.map_err(|e| RankError::csv_at(e, path))?;
        let keys = record.iter().take(key_columns).map(String::from).collect();
        let attributes = names
            .iter()
            .zip(record.iter().skip(key_columns))
            .map(|(name, cell)| (name.clone(), AttrValue::parse_cell(cell)))
            .collect();
        Ok(Row { keys, attributes })
    }))
}
