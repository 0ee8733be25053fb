mod common;

use baconpath_core::{
    AttributeFilter, Graph, GraphError, build_graph, recommendation_graph, recommendations,
    recommendations_filtered, similarity,
};
use common::record;

fn catalogue() -> Graph {
    build_graph(&[
        record("M1", &["a", "b", "c"], 2000, 6.0),
        record("M2", &["a", "b", "d"], 2004, 5.0),
        record("M3", &["c", "e"], 2012, 8.0),
        record("M4", &["x", "y"], 2001, 9.0),
    ])
    .unwrap()
}

fn movies(recommended: &[baconpath_core::Recommendation]) -> Vec<&str> {
    recommended.iter().map(|r| r.movie.as_str()).collect()
}

#[test]
fn test_similarity_with_itself_is_one() {
    let graph = catalogue();
    assert_eq!(similarity(&graph, "M1", "M1").unwrap(), 1.0);
}

#[test]
fn test_similarity_is_symmetric() {
    let graph = catalogue();
    let keys = ["M1", "M2", "M3", "M4"];

    for a in keys {
        for b in keys {
            assert_eq!(
                similarity(&graph, a, b).unwrap(),
                similarity(&graph, b, a).unwrap()
            );
        }
    }
    assert_eq!(similarity(&graph, "M1", "M2").unwrap(), 0.5);
    assert_eq!(similarity(&graph, "M1", "M3").unwrap(), 0.25);
}

#[test]
fn test_similarity_requires_movies() {
    let graph = catalogue();

    assert_eq!(
        similarity(&graph, "M1", "Nope"),
        Err(GraphError::not_found("Nope"))
    );
    assert!(matches!(
        similarity(&graph, "M1", "a"),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_recommendations_rank_by_similarity() {
    let graph = catalogue();

    let top = recommendations(&graph, "M1", 1, None).unwrap();
    assert_eq!(movies(&top), vec!["M2"]);

    let all = recommendations(&graph, "M1", 10, None).unwrap();
    assert_eq!(movies(&all), vec!["M2", "M3"]);
    assert_eq!(all[1].similarity, 0.25);
}

#[test]
fn test_recommendation_ties_follow_key_order() {
    let graph = build_graph(&[
        record("Target", &["a", "b"], 2000, 6.0),
        record("Zeta", &["a", "z"], 2000, 6.0),
        record("Alpha", &["a", "y"], 2000, 6.0),
        record("Mid", &["b", "w"], 2000, 6.0),
    ])
    .unwrap();

    let ranked = recommendations(&graph, "Target", 10, None).unwrap();
    assert_eq!(movies(&ranked), vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn test_recommendations_with_filter() {
    let graph = catalogue();

    let high_rated = AttributeFilter::new("rating", 7.0, 10.0).unwrap();
    let ranked = recommendations(&graph, "M1", 10, Some(&high_rated)).unwrap();
    assert_eq!(movies(&ranked), vec!["M3"]);

    let early = recommendations_filtered(&graph, "M1", 10, "year", 2000.0, 2005.0).unwrap();
    assert_eq!(movies(&early), vec!["M2"]);
}

#[test]
fn test_filter_excluding_everything_is_empty() {
    let graph = catalogue();

    let ranked = recommendations_filtered(&graph, "M1", 5, "year", 1900.0, 1950.0).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_recommendation_errors() {
    let graph = catalogue();

    assert!(recommendations(&graph, "Missing", 3, None).unwrap_err().is_not_found());
    assert_eq!(
        recommendations_filtered(&graph, "M1", 3, "budget", 0.0, 1.0),
        Err(GraphError::invalid_key("budget"))
    );
    assert!(matches!(
        recommendations(&graph, "M1", 0, None),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_recommendation_graph_is_a_star() {
    let graph = catalogue();
    let ranked = recommendations(&graph, "M1", 10, None).unwrap();

    let star = recommendation_graph(&graph, "M1", &ranked).unwrap();

    assert_eq!(star.len(), 3);
    assert_eq!(star.sim_score("M1").unwrap(), 1.0);
    assert_eq!(star.sim_score("M2").unwrap(), 0.5);
    assert_eq!(star.sim_score("M3").unwrap(), 0.25);
    assert!(star.adjacent("M2", "M1"));
    assert!(star.adjacent("M1", "M3"));
    assert!(!star.adjacent("M2", "M3"));
    assert_eq!(star.movie_attributes("M3").unwrap().unwrap().year, 2012);
    assert_eq!(star.cast_members("M2").unwrap().len(), 3);
}
