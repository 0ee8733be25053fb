mod common;

use baconpath_core::{Graph, GraphError, MovieAttributes, VertexKind};
use common::triangle_graph;

#[test]
fn test_bipartite_build() {
    let graph = triangle_graph();

    assert_eq!(graph.len(), 6);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.all_keys(Some(VertexKind::Actor)), vec!["A1", "A2", "A3"]);
    assert_eq!(graph.all_keys(Some(VertexKind::Movie)), vec!["M1", "M2", "M3"]);

    let neighbors: Vec<&str> = graph.neighbors("A1").unwrap().iter().map(String::as_str).collect();
    assert_eq!(neighbors, vec!["M1", "M2"]);
}

#[test]
fn test_adjacency_is_symmetric_everywhere() {
    let graph = triangle_graph();
    let keys = graph.all_keys(None);

    for a in &keys {
        assert!(!graph.adjacent(a, a));
        for b in &keys {
            assert_eq!(graph.adjacent(a, b), graph.adjacent(b, a));
        }
    }
}

#[test]
fn test_readding_vertex_changes_nothing() {
    let mut graph = triangle_graph();
    let before = graph.neighbors("M1").unwrap().clone();

    graph.add_vertex("M1", VertexKind::Actor);

    assert_eq!(graph.kind("M1"), Some(VertexKind::Movie));
    assert_eq!(graph.neighbors("M1").unwrap(), &before);
}

#[test]
fn test_readding_edge_is_noop() {
    let mut graph = triangle_graph();
    graph.add_edge("A1", "M1").unwrap();
    graph.add_edge("M1", "A1").unwrap();

    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_lookup_errors() {
    let mut graph = Graph::new();
    graph.add_vertex("solo", VertexKind::Actor);

    assert_eq!(graph.neighbors("ghost"), Err(GraphError::not_found("ghost")));
    assert_eq!(
        graph.record_appearance("ghost", "M"),
        Err(GraphError::not_found("ghost"))
    );
    assert!(graph
        .set_movie_attributes("ghost", Vec::new(), MovieAttributes::default())
        .unwrap_err()
        .is_not_found());
    assert!(graph.common_movies("solo", "ghost").unwrap_err().is_not_found());
}

#[test]
fn test_appearances_and_common_movies() {
    let graph = triangle_graph();

    let appearances: Vec<&str> = graph.appearances("A2").unwrap().iter().map(String::as_str).collect();
    assert_eq!(appearances, vec!["M2", "M3"]);

    let shared: Vec<String> = graph.common_movies("A2", "A3").unwrap().into_iter().collect();
    assert_eq!(shared, vec!["M3"]);
    assert!(graph.common_movies("A1", "M1").unwrap().is_empty());
}

#[test]
fn test_movie_payload() {
    let graph = triangle_graph();

    let attributes = graph.movie_attributes("M2").unwrap().unwrap();
    assert_eq!(attributes.year, 2000);
    assert_eq!(attributes.rating, 7.5);
    assert_eq!(graph.cast_members("M3").unwrap().len(), 2);
    assert_eq!(graph.sim_score("M3").unwrap(), 0.0);
}
