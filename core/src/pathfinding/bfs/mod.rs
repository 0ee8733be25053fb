mod state;

use std::time::Instant;

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::query_config::{AttributeFilter, MovieAttributeLookup};
use state::BfsState;

/// Outcome of a single breadth-first path search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Keys from start to target inclusive; empty when unreachable
    pub path: Vec<String>,
    pub vertices_visited: usize,
    pub elapsed_secs: f64,
}

impl PathResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, if one was found.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Decides whether the search may step from one vertex to a neighbor.
pub trait EdgeGate {
    fn allows(&self, graph: &Graph, from: &str, to: &str) -> bool;
}

pub struct Unfiltered;

impl EdgeGate for Unfiltered {
    fn allows(&self, _graph: &Graph, _from: &str, _to: &str) -> bool {
        true
    }
}

/// Admits an edge when at least one movie connecting its endpoints lies
/// inside the filter range.
pub struct AttributeGate<'a, L: MovieAttributeLookup + ?Sized> {
    pub filter: &'a AttributeFilter,
    pub movie_attrs: &'a L,
}

impl<L: MovieAttributeLookup + ?Sized> EdgeGate for AttributeGate<'_, L> {
    fn allows(&self, graph: &Graph, from: &str, to: &str) -> bool {
        connecting_movies(graph, from, to).into_iter().any(|movie| {
            self.movie_attrs
                .attributes_of(&movie)
                .is_some_and(|attrs| self.filter.matches(&attrs))
        })
    }
}

/// Movies that justify the edge between two vertices: the movie endpoint
/// itself, or the shared filmography of two actors.
pub fn connecting_movies(graph: &Graph, from: &str, to: &str) -> Vec<String> {
    let mut movies = Vec::new();
    for key in [from, to] {
        if graph.vertex(key).is_some_and(Vertex::is_movie) {
            movies.push(key.to_string());
        }
    }
    if movies.is_empty() {
        if let Ok(common) = graph.common_movies(from, to) {
            movies.extend(common);
        }
    }
    movies
}

fn run_search<G: EdgeGate>(graph: &Graph, start: &str, target: &str, gate: &G) -> Result<PathResult> {
    let search_timer = Instant::now();

    let start = graph.require(start)?.key();
    graph.require(target)?;

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state
        .find_path_to_target(graph, target, gate)
        .unwrap_or_default();

    Ok(PathResult {
        path,
        vertices_visited: bfs_state.visited.len(),
        elapsed_secs: search_timer.elapsed().as_secs_f64(),
    })
}

/// Breadth-first search from `start` to `target`, expanding neighbors in
/// ascending key order.
pub fn bfs_find_path(graph: &Graph, start: &str, target: &str) -> Result<PathResult> {
    run_search(graph, start, target, &Unfiltered)
}

/// Same as [`bfs_find_path`] but only crosses edges backed by a movie that
/// passes `filter`.
pub fn bfs_find_path_filtered<L: MovieAttributeLookup + ?Sized>(
    graph: &Graph,
    start: &str,
    target: &str,
    filter: &AttributeFilter,
    movie_attrs: &L,
) -> Result<PathResult> {
    let gate = AttributeGate {
        filter,
        movie_attrs,
    };
    run_search(graph, start, target, &gate)
}

pub fn shortest_path(graph: &Graph, start: &str, target: &str) -> Result<Vec<String>> {
    Ok(bfs_find_path(graph, start, target)?.path)
}

pub fn shortest_path_filtered<L: MovieAttributeLookup + ?Sized>(
    graph: &Graph,
    start: &str,
    target: &str,
    attribute_key: &str,
    lower: f64,
    upper: f64,
    movie_attrs: &L,
) -> Result<Vec<String>> {
    let filter = AttributeFilter::new(attribute_key, lower, upper)?;
    Ok(bfs_find_path_filtered(graph, start, target, &filter, movie_attrs)?.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MovieAttributes, VertexKind};

    #[test]
    fn test_connecting_movies_between_actors() {
        let mut graph = Graph::new();
        graph.add_vertex("a", VertexKind::Actor);
        graph.add_vertex("b", VertexKind::Actor);
        graph.add_vertex("m", VertexKind::Movie);
        graph.record_appearance("a", "m").unwrap();
        graph.record_appearance("b", "m").unwrap();
        graph
            .set_movie_attributes("m", Vec::new(), MovieAttributes::new(2001, 1, 7.0))
            .unwrap();

        assert_eq!(connecting_movies(&graph, "a", "b"), vec!["m"]);
        assert_eq!(connecting_movies(&graph, "a", "m"), vec!["m"]);
    }

    #[test]
    fn test_path_result_hops() {
        let result = PathResult {
            path: vec!["a".into(), "m".into(), "b".into()],
            vertices_visited: 3,
            elapsed_secs: 0.0,
        };
        assert!(result.found());
        assert_eq!(result.hops(), Some(2));

        let empty = PathResult {
            path: Vec::new(),
            vertices_visited: 1,
            elapsed_secs: 0.0,
        };
        assert_eq!(empty.hops(), None);
    }
}
