// tests/unit_graph.rs
//! Graph store construction, lookup, and degree accounting.

use walkrank_core::error::RankError;
use walkrank_core::graph::{attrs, AttrValue, Attributes, Graph, GraphKind};

fn nodes(kind: GraphKind, n: u32) -> Graph<u32> {
    let mut g = Graph::new(kind);
    for i in 0..n {
        g.add_node(i, Attributes::new()).unwrap();
    }
    g
}

#[test]
fn test_add_node_rejects_duplicate() {
    let mut g = nodes(GraphKind::Directed, 1);
    let err = g.add_node(0, Attributes::new()).unwrap_err();
    assert!(matches!(err, RankError::DuplicateNode(ref id) if id == "0"));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn test_node_attributes_set_later() {
    let mut g = Graph::directed();
    g.add_node("AMS", attrs([("country", "The Netherlands".into())]))
        .unwrap();
    let prev = g.set_node_attr(&"AMS", "hub", true).unwrap();
    assert!(prev.is_none());

    let node = g.node(&"AMS").unwrap();
    assert_eq!(node.attr("hub"), Some(&AttrValue::Bool(true)));
    assert_eq!(node.attr("country").and_then(AttrValue::as_str), Some("The Netherlands"));

    assert!(matches!(
        g.set_node_attr(&"ORD", "hub", false),
        Err(RankError::UnknownNode(_))
    ));
}

#[test]
fn test_unknown_endpoint_leaves_edges_unchanged() {
    let mut g = nodes(GraphKind::Directed, 2);
    g.add_edge(0, 1, Attributes::new()).unwrap();

    let err = g.add_edge(0, 9, Attributes::new()).unwrap_err();
    assert!(matches!(err, RankError::UnknownNode(ref id) if id == "9"));
    let err = g.add_edge(9, 0, Attributes::new()).unwrap_err();
    assert!(matches!(err, RankError::UnknownNode(_)));

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.out_degree(&0).unwrap(), 1);
    assert_eq!(g.in_degree(&0).unwrap(), 0);
    assert!(!g.contains_node(&9));
}

#[test]
fn test_duplicate_edge_rejected() {
    let mut g = nodes(GraphKind::Directed, 2);
    g.add_edge(0, 1, Attributes::new()).unwrap();
    let err = g.add_edge(0, 1, Attributes::new()).unwrap_err();
    assert!(matches!(err, RankError::DuplicateEdge { .. }));
    // The reverse direction is a different edge.
    g.add_edge(1, 0, Attributes::new()).unwrap();
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_directed_degrees_and_neighbors() {
    let mut g = nodes(GraphKind::Directed, 3);
    g.add_edge(0, 1, Attributes::new()).unwrap();
    g.add_edge(0, 2, Attributes::new()).unwrap();
    g.add_edge(1, 0, Attributes::new()).unwrap();

    assert_eq!(g.out_degree(&0).unwrap(), 2);
    assert_eq!(g.in_degree(&0).unwrap(), 1);
    assert_eq!(g.degree(&0).unwrap(), 3);
    assert_eq!(g.out_degree(&2).unwrap(), 0);

    assert_eq!(g.neighbors_out(&0).unwrap(), vec![&1, &2]);
    assert_eq!(g.neighbors_in(&0).unwrap(), vec![&1]);
    assert_eq!(g.neighbors_in(&2).unwrap(), vec![&0]);

    let dangling: Vec<usize> = g.dangling_indices().collect();
    assert_eq!(dangling, vec![2]);
}

#[test]
fn test_adjacency_agrees_in_both_directions() {
    let mut g = nodes(GraphKind::Directed, 4);
    for (s, t) in [(0, 1), (1, 2), (2, 0), (3, 0), (3, 3)] {
        g.add_edge(s, t, Attributes::new()).unwrap();
    }
    for edge in g.edges() {
        let (s, t) = edge.endpoints();
        assert!(g.neighbors_out(s).unwrap().contains(&t));
        assert!(g.neighbors_in(t).unwrap().contains(&s));
    }
    // Self-loops are allowed when directed and count on both sides.
    assert_eq!(g.degree(&3).unwrap(), 3);
}

#[test]
fn test_undirected_mirrors_without_double_counting() {
    let mut g = nodes(GraphKind::Undirected, 3);
    g.add_edge(0, 1, attrs([("weight", 2.5.into())])).unwrap();
    g.add_edge(1, 2, Attributes::new()).unwrap();

    assert_eq!(g.edge_count(), 4);
    assert!(g.contains_edge(&1, &0));
    assert_eq!(g.edge(&1, &0).unwrap().weight(), Some(2.5));

    assert_eq!(g.degree(&1).unwrap(), 2);
    assert_eq!(g.degree(&0).unwrap(), 1);
    assert_eq!(g.in_degree(&1).unwrap(), g.out_degree(&1).unwrap());
}

#[test]
fn test_undirected_rejects_reverse_duplicate_and_self_loop() {
    let mut g = nodes(GraphKind::Undirected, 2);
    g.add_edge(0, 1, Attributes::new()).unwrap();
    assert!(matches!(
        g.add_edge(1, 0, Attributes::new()),
        Err(RankError::DuplicateEdge { .. })
    ));
    assert!(matches!(
        g.add_edge(0, 0, Attributes::new()),
        Err(RankError::SelfLoop(_))
    ));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_listing_is_insertion_ordered() {
    let mut g = Graph::directed();
    for id in ["c", "a", "b"] {
        g.add_node(id, Attributes::new()).unwrap();
    }
    g.add_edge("b", "a", Attributes::new()).unwrap();
    g.add_edge("a", "c", Attributes::new()).unwrap();

    let ids: Vec<_> = g.node_ids().copied().collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    let edges: Vec<_> = g.edges().map(|e| (*e.source(), *e.target())).collect();
    assert_eq!(edges, vec![("b", "a"), ("a", "c")]);
    assert_eq!(g.index_of(&"a"), Some(1));
    assert_eq!(g.key_at(2), Some(&"b"));
}

#[test]
fn test_edge_lookup_errors() {
    let g = nodes(GraphKind::Directed, 2);
    assert!(matches!(g.edge(&0, &1), Err(RankError::UnknownEdge { .. })));
    assert!(matches!(g.edge(&0, &5), Err(RankError::UnknownNode(_))));
    assert!(matches!(g.out_degree(&5), Err(RankError::UnknownNode(_))));
}

#[test]
fn test_display_sorts_nodes_and_edges() {
    let mut g = Graph::directed();
    g.add_node(1, attrs([("country", "The Netherlands".into()), ("airport_name", "AMS".into())]))
        .unwrap();
    g.add_node(0, attrs([("airport_name", "DTW".into())])).unwrap();
    g.add_edge(1, 0, attrs([("airline_name", "KLM".into())])).unwrap();
    g.add_edge(0, 1, Attributes::new()).unwrap();

    let expected = "\
DirectedGraph:
Node [0]
    airport_name : DTW
Node [1]
    airport_name : AMS
    country : The Netherlands
Edge from node [0] to node [1]
Edge from node [1] to node [0]
    airline_name : KLM
";
    assert_eq!(g.to_string(), expected);
}
