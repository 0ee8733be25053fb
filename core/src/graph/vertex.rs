use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Actor,
    Movie,
}

impl VertexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Actor => "actor",
            VertexKind::Movie => "movie",
        }
    }
}

/// Release year, vote count and rating of a movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieAttributes {
    pub year: i32,
    pub votes: u64,
    pub rating: f64,
}

impl MovieAttributes {
    pub fn new(year: i32, votes: u64, rating: f64) -> Self {
        Self {
            year,
            votes,
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VertexPayload {
    Actor {
        appearances: BTreeSet<String>,
    },
    Movie {
        cast_members: BTreeSet<String>,
        attributes: Option<MovieAttributes>,
        sim_score: Option<f64>,
    },
}

impl VertexPayload {
    fn empty(kind: VertexKind) -> Self {
        match kind {
            VertexKind::Actor => VertexPayload::Actor {
                appearances: BTreeSet::new(),
            },
            VertexKind::Movie => VertexPayload::Movie {
                cast_members: BTreeSet::new(),
                attributes: None,
                sim_score: None,
            },
        }
    }
}

/// A single actor or movie in the graph.
///
/// The kind is fixed by the payload variant chosen at construction, so
/// actor-only and movie-only fields can never be mixed up.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    key: String,
    neighbors: BTreeSet<String>,
    payload: VertexPayload,
}

impl Vertex {
    pub fn new(key: impl Into<String>, kind: VertexKind) -> Self {
        Self {
            key: key.into(),
            neighbors: BTreeSet::new(),
            payload: VertexPayload::empty(kind),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> VertexKind {
        match self.payload {
            VertexPayload::Actor { .. } => VertexKind::Actor,
            VertexPayload::Movie { .. } => VertexKind::Movie,
        }
    }

    pub fn is_actor(&self) -> bool {
        self.kind() == VertexKind::Actor
    }

    pub fn is_movie(&self) -> bool {
        self.kind() == VertexKind::Movie
    }

    /// Neighbor keys in ascending order.
    pub fn neighbors(&self) -> &BTreeSet<String> {
        &self.neighbors
    }

    /// Movies this actor appears in. Empty for movie vertices.
    pub fn appearances(&self) -> Option<&BTreeSet<String>> {
        match &self.payload {
            VertexPayload::Actor { appearances } => Some(appearances),
            VertexPayload::Movie { .. } => None,
        }
    }

    pub fn cast_members(&self) -> Option<&BTreeSet<String>> {
        match &self.payload {
            VertexPayload::Movie { cast_members, .. } => Some(cast_members),
            VertexPayload::Actor { .. } => None,
        }
    }

    /// `None` for actors and for movies whose attributes were never set.
    pub fn movie_attributes(&self) -> Option<&MovieAttributes> {
        match &self.payload {
            VertexPayload::Movie { attributes, .. } => attributes.as_ref(),
            VertexPayload::Actor { .. } => None,
        }
    }

    /// Similarity score attached for recommendation display; 0 when unset.
    pub fn sim_score(&self) -> f64 {
        match &self.payload {
            VertexPayload::Movie { sim_score, .. } => sim_score.unwrap_or(0.0),
            VertexPayload::Actor { .. } => 0.0,
        }
    }

    pub(crate) fn link(&mut self, other: &str) {
        if other != self.key {
            self.neighbors.insert(other.to_string());
        }
    }

    /// Returns false when called on a movie vertex.
    pub(crate) fn add_appearance(&mut self, movie: &str) -> bool {
        match &mut self.payload {
            VertexPayload::Actor { appearances } => {
                appearances.insert(movie.to_string());
                true
            }
            VertexPayload::Movie { .. } => false,
        }
    }

    /// Extends the cast and replaces the attributes when `attrs` is given.
    /// Returns false when called on an actor vertex.
    pub(crate) fn merge_movie_info<I>(&mut self, cast: I, attrs: Option<MovieAttributes>) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        match &mut self.payload {
            VertexPayload::Movie {
                cast_members,
                attributes,
                ..
            } => {
                cast_members.extend(cast);
                if attrs.is_some() {
                    *attributes = attrs;
                }
                true
            }
            VertexPayload::Actor { .. } => false,
        }
    }

    /// Returns false when called on an actor vertex.
    pub(crate) fn set_sim_score(&mut self, score: f64) -> bool {
        match &mut self.payload {
            VertexPayload::Movie { sim_score, .. } => {
                *sim_score = Some(score);
                true
            }
            VertexPayload::Actor { .. } => false,
        }
    }
}
