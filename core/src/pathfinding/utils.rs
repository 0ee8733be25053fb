use crate::error::Result;
use crate::graph::Graph;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;

pub fn reconstruct_path(parent_map: &FxHashMap<&str, &str>, start: &str, target: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node.to_string());
        match parent_map.get(current_node) {
            Some(parent_node) => current_node = *parent_node,
            None => break,
        }
    }

    path.push(start.to_string());
    path.reverse();
    path
}

/// One actor-to-actor step of a Bacon path with the films they share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorHop {
    pub from: String,
    pub to: String,
    pub shared_movies: BTreeSet<String>,
}

/// Collapses a path into consecutive actor pairs, annotating each pair with
/// the movies both appear in.
pub fn actor_hops(graph: &Graph, path: &[String]) -> Result<Vec<ActorHop>> {
    let mut actors = Vec::new();
    for key in path {
        if graph.require(key)?.is_actor() {
            actors.push(key);
        }
    }

    actors
        .windows(2)
        .map(|pair| {
            Ok(ActorHop {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
                shared_movies: graph.common_movies(pair[0], pair[1])?,
            })
        })
        .collect()
}
