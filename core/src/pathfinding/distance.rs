use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use super::bfs::{bfs_find_path, bfs_find_path_filtered};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexKind};
use crate::query_config::AttributeFilter;

/// Hop distance from a start vertex to every other vertex. `None` marks a
/// vertex that cannot be reached. The start vertex itself is not included.
pub type DistanceMap = FxHashMap<String, Option<usize>>;

fn hop_distances<'g>(graph: &'g Graph, start: &'g str) -> FxHashMap<&'g str, usize> {
    let mut distances = FxHashMap::default();
    let mut queue = VecDeque::new();

    distances.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };
        for neighbor in vertex.neighbors() {
            let neighbor = neighbor.as_str();
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    distances
}

pub fn shortest_distance_map(graph: &Graph, start: &str) -> Result<DistanceMap> {
    let start = graph.require(start)?.key();
    let reached = hop_distances(graph, start);

    Ok(graph
        .vertices()
        .filter(|vertex| vertex.key() != start)
        .map(|vertex| (vertex.key().to_string(), reached.get(vertex.key()).copied()))
        .collect())
}

/// Mean of the finite distances from `start`; infinite when nothing is
/// reachable.
pub fn average_distance(graph: &Graph, start: &str) -> Result<f64> {
    let distances = shortest_distance_map(graph, start)?;
    Ok(mean(distances.values().filter_map(|distance| *distance)))
}

fn mean(values: impl Iterator<Item = usize>) -> f64 {
    let (total, count) = values.fold((0usize, 0usize), |(total, count), value| {
        (total + value, count + 1)
    });
    if count == 0 {
        f64::INFINITY
    } else {
        total as f64 / count as f64
    }
}

fn require_actor(graph: &Graph, key: &str) -> Result<()> {
    match graph.require(key)?.kind() {
        VertexKind::Actor => Ok(()),
        VertexKind::Movie => Err(GraphError::invalid_argument(format!(
            "'{}' is a movie, Bacon numbers are defined between actors",
            key
        ))),
    }
}

/// Number of films separating two actors, or `None` when they are not
/// connected (under `filter`, if one is given).
pub fn bacon_number(
    graph: &Graph,
    start: &str,
    target: &str,
    filter: Option<&AttributeFilter>,
) -> Result<Option<usize>> {
    require_actor(graph, start)?;
    require_actor(graph, target)?;

    let result = match filter {
        Some(filter) => bfs_find_path_filtered(graph, start, target, filter, graph)?,
        None => bfs_find_path(graph, start, target)?,
    };
    Ok(result.hops().map(|hops| hops / 2))
}

/// Mean Bacon number from `actor` to every other actor it can reach.
pub fn average_bacon_number(graph: &Graph, actor: &str) -> Result<f64> {
    require_actor(graph, actor)?;
    let start = graph.require(actor)?.key();
    let reached = hop_distances(graph, start);

    Ok(mean(reached.into_iter().filter_map(|(key, hops)| {
        (key != start && graph.kind(key) == Some(VertexKind::Actor)).then_some(hops / 2)
    })))
}

/// Every actor's average Bacon number, best connected first. Actors that
/// share no film with anyone are left out.
pub fn average_bacon_ranking(graph: &Graph) -> Vec<(String, f64)> {
    let mut ranking: Vec<(String, f64)> = graph
        .all_keys(Some(VertexKind::Actor))
        .into_iter()
        .filter_map(|actor| {
            average_bacon_number(graph, actor)
                .ok()
                .filter(|average| average.is_finite())
                .map(|average| (actor.to_string(), average))
        })
        .collect();

    ranking.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}
