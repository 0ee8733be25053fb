use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use super::EdgeGate;
use crate::graph::Graph;
use crate::pathfinding::utils::reconstruct_path;

pub struct BfsState<'g> {
    start: &'g str,
    queue: VecDeque<&'g str>,
    pub visited: FxHashSet<&'g str>,
    parent_map: FxHashMap<&'g str, &'g str>,
}

impl<'g> BfsState<'g> {
    pub fn new(start: &'g str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &'g str, current: &'g str) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }

    pub fn find_path_to_target<G: EdgeGate>(
        &mut self,
        graph: &'g Graph,
        target: &str,
        gate: &G,
    ) -> Option<Vec<String>> {
        while let Some(current) = self.queue.pop_front() {
            if current == target {
                return Some(reconstruct_path(&self.parent_map, self.start, current));
            }

            let Some(vertex) = graph.vertex(current) else {
                continue;
            };
            for neighbor in vertex.neighbors() {
                let neighbor = neighbor.as_str();
                if !self.visited.contains(neighbor) && gate.allows(graph, current, neighbor) {
                    self.visit_neighbor(neighbor, current);
                }
            }
        }

        None
    }
}
