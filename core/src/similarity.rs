use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexKind};
use crate::query_config::{AttributeFilter, MovieAttributeLookup};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie: String,
    pub similarity: f64,
}

/// Jaccard index of the two movies' casts. Zero if either cast is empty.
pub fn similarity(graph: &Graph, movie1: &str, movie2: &str) -> Result<f64> {
    let first = graph.cast_members(movie1)?;
    let second = graph.cast_members(movie2)?;

    if first.is_empty() || second.is_empty() {
        return Ok(0.0);
    }

    let shared = first.intersection(second).count();
    let union = first.len() + second.len() - shared;
    Ok(shared as f64 / union as f64)
}

/// Movies sharing cast with `target_movie`, most similar first.
///
/// When `filter` is given, movies outside its range, or without recorded
/// attributes, are discarded before scoring. Equal scores are ordered by movie key.
pub fn recommendations(
    graph: &Graph,
    target_movie: &str,
    limit: usize,
    filter: Option<&AttributeFilter>,
) -> Result<Vec<Recommendation>> {
    if limit == 0 {
        return Err(GraphError::invalid_argument(
            "recommendation limit must be positive",
        ));
    }
    graph.cast_members(target_movie)?;

    let mut ranked = Vec::new();
    for movie in graph.all_keys(Some(VertexKind::Movie)) {
        if movie == target_movie {
            continue;
        }
        if let Some(filter) = filter {
            let in_range = graph
                .attributes_of(movie)
                .is_some_and(|attrs| filter.matches(&attrs));
            if !in_range {
                continue;
            }
        }

        let score = similarity(graph, target_movie, movie)?;
        if score > 0.0 {
            ranked.push(Recommendation {
                movie: movie.to_string(),
                similarity: score,
            });
        }
    }

    // Stable sort keeps the ascending key order among ties.
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(limit);
    Ok(ranked)
}

/// [`recommendations`] restricted by an attribute named at runtime.
pub fn recommendations_filtered(
    graph: &Graph,
    target_movie: &str,
    limit: usize,
    attribute_key: &str,
    lower: f64,
    upper: f64,
) -> Result<Vec<Recommendation>> {
    let filter = AttributeFilter::new(attribute_key, lower, upper)?;
    recommendations(graph, target_movie, limit, Some(&filter))
}

/// Star graph of the target movie and its recommendations, each carrying
/// its similarity score for plotting. The target scores 1.
pub fn recommendation_graph(
    graph: &Graph,
    target_movie: &str,
    recommended: &[Recommendation],
) -> Result<Graph> {
    let mut star = Graph::with_capacity(recommended.len() + 1);

    copy_movie(graph, &mut star, target_movie)?;
    star.set_sim_score(target_movie, 1.0)?;

    for recommendation in recommended {
        copy_movie(graph, &mut star, &recommendation.movie)?;
        star.set_sim_score(&recommendation.movie, recommendation.similarity)?;
        if recommendation.movie != target_movie {
            star.add_edge(&recommendation.movie, target_movie)?;
        }
    }

    Ok(star)
}

fn copy_movie(source: &Graph, destination: &mut Graph, movie: &str) -> Result<()> {
    let cast = source.cast_members(movie)?.iter().cloned();
    destination.add_vertex(movie, VertexKind::Movie);
    match source.movie_attributes(movie)? {
        Some(attrs) => destination.set_movie_attributes(movie, cast, attrs),
        None => destination.extend_cast(movie, cast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MovieAttributes;

    fn movie(graph: &mut Graph, key: &str, cast: &[&str]) {
        graph.add_vertex(key, VertexKind::Movie);
        graph
            .set_movie_attributes(
                key,
                cast.iter().map(|name| name.to_string()),
                MovieAttributes::new(2000, 100, 7.0),
            )
            .unwrap();
    }

    #[test]
    fn test_jaccard_index() {
        let mut graph = Graph::new();
        movie(&mut graph, "M1", &["a", "b"]);
        movie(&mut graph, "M2", &["b", "c"]);

        let score = similarity(&graph, "M1", "M2").unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_cast_scores_zero() {
        let mut graph = Graph::new();
        movie(&mut graph, "M1", &[]);
        movie(&mut graph, "M2", &["b"]);

        assert_eq!(similarity(&graph, "M1", "M2").unwrap(), 0.0);
        assert_eq!(similarity(&graph, "M1", "M1").unwrap(), 0.0);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut graph = Graph::new();
        movie(&mut graph, "M1", &["a"]);

        assert!(matches!(
            recommendations(&graph, "M1", 0, None),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter_skips_movies_without_attributes() {
        let mut graph = Graph::new();
        movie(&mut graph, "M1", &["a", "b"]);
        movie(&mut graph, "M2", &["a"]);
        graph.add_vertex("Unrated", VertexKind::Movie);
        graph.extend_cast("Unrated", vec!["b".to_string()]).unwrap();

        let everything = recommendations(&graph, "M1", 5, None).unwrap();
        assert_eq!(everything.len(), 2);

        let from_zero = AttributeFilter::new("rating", 0.0, 10.0).unwrap();
        let filtered = recommendations(&graph, "M1", 5, Some(&from_zero)).unwrap();
        let titles: Vec<&str> = filtered.iter().map(|r| r.movie.as_str()).collect();
        assert_eq!(titles, vec!["M2"]);

        let star = recommendation_graph(&graph, "M1", &everything).unwrap();
        assert_eq!(star.movie_attributes("Unrated").unwrap(), None);
    }
}
