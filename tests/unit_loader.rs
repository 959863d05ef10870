// tests/unit_loader.rs
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use walkrank_core::error::RankError;
use walkrank_core::graph::{AttrValue, Graph, GraphKind};
use walkrank_core::loader::{self, read_graph_from_csv};
use walkrank_core::rank::pagerank_from_csv;

const NODES: &str = "\
id,airport_name,country
0,DTW,United States
1,AMS,The Netherlands
2,ORD,United States
";

const EDGES: &str = "\
source,target,flight_time_in_hours,airline_name
0,1,8,KLM
0,2,1.5,Delta
1,0,8,KLM
";

fn write_tables(nodes: &str, edges: &str) -> (TempDir, PathBuf, PathBuf) {
    let d = tempfile::tempdir().unwrap();
    let n = d.path().join("nodes.csv");
    let e = d.path().join("edges.csv");
    fs::write(&n, nodes).unwrap();
    fs::write(&e, edges).unwrap();
    (d, n, e)
}

#[test]
fn test_load_directed_tables() {
    let (_d, n, e) = write_tables(NODES, EDGES);
    let g = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap();

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.out_degree(&"0".to_string()).unwrap(), 2);

    let ams = g.node(&"1".to_string()).unwrap();
    assert_eq!(ams.attr("airport_name"), Some(&AttrValue::from("AMS")));
    assert_eq!(ams.attr("country"), Some(&AttrValue::from("The Netherlands")));

    let edge = g.edge(&"0".to_string(), &"2".to_string()).unwrap();
    assert_eq!(edge.attr("flight_time_in_hours"), Some(&AttrValue::Float(1.5)));
    assert_eq!(edge.attr("airline_name"), Some(&AttrValue::from("Delta")));
}

#[test]
fn test_load_undirected_tables() {
    let (_d, n, e) = write_tables(NODES, "source,target\n0,1\n1,2\n");
    let g = read_graph_from_csv(&n, &e, GraphKind::Undirected).unwrap();
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.degree(&"1".to_string()).unwrap(), 2);
}

#[test]
fn test_unknown_endpoint_aborts_load() {
    let (_d, n, e) = write_tables(NODES, "source,target\n0,1\n0,7\n");
    let err = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap_err();
    assert!(matches!(err, RankError::UnknownNode(ref id) if id == "7"));
}

#[test]
fn test_duplicate_node_row() {
    let (_d, n, e) = write_tables("id\na\na\n", "source,target\n");
    let err = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap_err();
    assert!(matches!(err, RankError::DuplicateNode(_)));
}

#[test]
fn test_ragged_row_is_csv_error() {
    let (_d, n, e) = write_tables(NODES, "source,target,weight\n0,1\n");
    let err = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap_err();
    match err {
        RankError::Csv { path, .. } => assert!(path.ends_with("edges.csv")),
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn test_edge_table_needs_two_columns() {
    let (_d, n, e) = write_tables(NODES, "source\n0\n");
    let err = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap_err();
    assert!(matches!(err, RankError::MalformedTable { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = read_graph_from_csv(
        d.path().join("nope.csv"),
        d.path().join("edges.csv"),
        GraphKind::Directed,
    )
    .unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn test_reader_loaders() {
    let mut g = Graph::directed();
    let nodes = loader::load_nodes(&mut g, NODES.as_bytes()).unwrap();
    let edges = loader::load_edges(&mut g, EDGES.as_bytes()).unwrap();
    assert_eq!((nodes, edges), (3, 3));
    assert_eq!(g.in_degree(&"0".to_string()).unwrap(), 1);
}

#[test]
fn test_pagerank_from_csv() {
    let (_d, n, e) = write_tables(NODES, EDGES);
    let ranks = pagerank_from_csv(&n, &e, 40, 0.85).unwrap();
    assert_eq!(ranks.len(), 3);
    assert!((ranks.sum() - 1.0).abs() < 1e-9);
    let top = ranks.sorted_by_rank(5)[0].0.clone();
    assert_eq!(top, "0");
}

#[test]
fn test_loaded_cells_print_verbatim() {
    let (_d, n, e) = write_tables(
        "id,elevation\n0,1.0\n1,1e3\n",
        "source,target,weight\n0,1,2.50\n",
    );
    let g = read_graph_from_csv(&n, &e, GraphKind::Directed).unwrap();

    let listing = g.to_string();
    assert!(listing.contains("    elevation : 1.0\n"));
    assert!(listing.contains("    elevation : 1e3\n"));
    assert!(listing.contains("    weight : 2.50\n"));

    let edge = g.edge(&"0".to_string(), &"1".to_string()).unwrap();
    assert_eq!(edge.weight(), Some(2.5));
}
