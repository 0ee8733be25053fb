pub mod vertex;

pub use vertex::{MovieAttributes, Vertex, VertexKind, VertexPayload};

use crate::error::{GraphError, Result};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// In-memory bipartite actor/movie graph.
///
/// Vertices live in an arena keyed by name; adjacency is stored as sets of
/// keys on each vertex and is always kept symmetric. Vertices and edges are
/// only ever added, never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxHashMap<String, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(vertex_count, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .values()
            .map(|vertex| vertex.neighbors().len())
            .sum::<usize>()
            / 2
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    pub fn kind(&self, key: &str) -> Option<VertexKind> {
        self.vertices.get(key).map(Vertex::kind)
    }

    pub(crate) fn require(&self, key: &str) -> Result<&Vertex> {
        self.vertices
            .get(key)
            .ok_or_else(|| GraphError::not_found(key))
    }

    fn require_mut(&mut self, key: &str) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(key)
            .ok_or_else(|| GraphError::not_found(key))
    }

    /// Inserts a vertex with no neighbors. Existing keys keep their
    /// original kind and adjacency.
    pub fn add_vertex(&mut self, key: &str, kind: VertexKind) {
        if !self.vertices.contains_key(key) {
            self.vertices.insert(key.to_string(), Vertex::new(key, kind));
        }
    }

    pub fn add_edge(&mut self, key1: &str, key2: &str) -> Result<()> {
        if key1 == key2 {
            return Err(GraphError::invalid_argument(format!(
                "cannot link '{}' to itself",
                key1
            )));
        }
        self.require(key1)?;
        self.require(key2)?;

        self.require_mut(key1)?.link(key2);
        self.require_mut(key2)?.link(key1);
        Ok(())
    }

    pub fn adjacent(&self, key1: &str, key2: &str) -> bool {
        match (self.vertices.get(key1), self.vertices.get(key2)) {
            (Some(vertex), Some(_)) => vertex.neighbors().contains(key2),
            _ => false,
        }
    }

    pub fn neighbors(&self, key: &str) -> Result<&BTreeSet<String>> {
        Ok(self.require(key)?.neighbors())
    }

    /// All keys, optionally restricted to one kind, in ascending order.
    pub fn all_keys(&self, kind_filter: Option<VertexKind>) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .vertices
            .values()
            .filter(|vertex| kind_filter.is_none_or(|kind| vertex.kind() == kind))
            .map(Vertex::key)
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn record_appearance(&mut self, actor_key: &str, movie_key: &str) -> Result<()> {
        let actor = self.require_mut(actor_key)?;
        if actor.add_appearance(movie_key) {
            Ok(())
        } else {
            Err(GraphError::invalid_argument(format!(
                "'{}' is a movie and cannot record appearances",
                actor_key
            )))
        }
    }

    pub fn appearances(&self, actor_key: &str) -> Result<&BTreeSet<String>> {
        self.require(actor_key)?
            .appearances()
            .ok_or_else(|| GraphError::invalid_argument(format!("'{}' is not an actor", actor_key)))
    }

    /// Movies both vertices appear in. Movie vertices have no appearances,
    /// so any pair involving a movie yields an empty set.
    pub fn common_movies(&self, key1: &str, key2: &str) -> Result<BTreeSet<String>> {
        let first = self.require(key1)?;
        let second = self.require(key2)?;

        match (first.appearances(), second.appearances()) {
            (Some(a), Some(b)) => Ok(a.intersection(b).cloned().collect()),
            _ => Ok(BTreeSet::new()),
        }
    }

    pub fn set_movie_attributes<I>(
        &mut self,
        movie_key: &str,
        cast: I,
        attrs: MovieAttributes,
    ) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        self.merge_movie(movie_key, cast, Some(attrs))
    }

    /// Adds cast members without touching the movie's attributes.
    pub fn extend_cast<I>(&mut self, movie_key: &str, cast: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        self.merge_movie(movie_key, cast, None)
    }

    fn merge_movie<I>(
        &mut self,
        movie_key: &str,
        cast: I,
        attrs: Option<MovieAttributes>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let movie = self.require_mut(movie_key)?;
        if movie.merge_movie_info(cast, attrs) {
            Ok(())
        } else {
            Err(GraphError::invalid_argument(format!(
                "'{}' is an actor and has no movie attributes",
                movie_key
            )))
        }
    }

    pub fn cast_members(&self, movie_key: &str) -> Result<&BTreeSet<String>> {
        self.require(movie_key)?
            .cast_members()
            .ok_or_else(|| GraphError::invalid_argument(format!("'{}' is not a movie", movie_key)))
    }

    /// Attributes of a movie, `None` until they have been set.
    pub fn movie_attributes(&self, movie_key: &str) -> Result<Option<MovieAttributes>> {
        let movie = self.require(movie_key)?;
        if !movie.is_movie() {
            return Err(GraphError::invalid_argument(format!(
                "'{}' is not a movie",
                movie_key
            )));
        }
        Ok(movie.movie_attributes().copied())
    }

    pub fn set_sim_score(&mut self, movie_key: &str, score: f64) -> Result<()> {
        let movie = self.require_mut(movie_key)?;
        if movie.set_sim_score(score) {
            Ok(())
        } else {
            Err(GraphError::invalid_argument(format!(
                "'{}' is an actor and cannot carry a similarity score",
                movie_key
            )))
        }
    }

    /// Similarity score used to scale plotted nodes; 0 where none was set.
    pub fn sim_score(&self, key: &str) -> Result<f64> {
        Ok(self.require(key)?.sim_score())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }
}
