use crate::error::{GraphError, Result};
use crate::graph::{Graph, MovieAttributes};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Movie attribute a query can be restricted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Year,
    Rating,
}

impl AttributeKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Year => "year",
            AttributeKey::Rating => "rating",
        }
    }

    pub fn value_of(&self, attributes: &MovieAttributes) -> f64 {
        match self {
            AttributeKey::Year => f64::from(attributes.year),
            AttributeKey::Rating => attributes.rating,
        }
    }
}

impl FromStr for AttributeKey {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "year" | "release year" | "release date" | "release_year" => Ok(AttributeKey::Year),
            "rating" => Ok(AttributeKey::Rating),
            _ => Err(GraphError::invalid_key(name)),
        }
    }
}

/// Inclusive `[lower, upper]` range over one movie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub key: AttributeKey,
    pub lower: f64,
    pub upper: f64,
}

impl AttributeFilter {
    pub fn new(key: &str, lower: f64, upper: f64) -> Result<Self> {
        Self::with_key(key.parse()?, lower, upper)
    }

    pub fn with_key(key: AttributeKey, lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() {
            return Err(GraphError::invalid_argument("filter bounds must be numbers"));
        }
        Ok(Self { key, lower, upper })
    }

    pub fn matches(&self, attributes: &MovieAttributes) -> bool {
        let value = self.key.value_of(attributes);
        self.lower <= value && value <= self.upper
    }
}

/// Source of movie attributes consulted by filtered queries.
pub trait MovieAttributeLookup {
    fn attributes_of(&self, movie_key: &str) -> Option<MovieAttributes>;
}

impl MovieAttributeLookup for Graph {
    fn attributes_of(&self, movie_key: &str) -> Option<MovieAttributes> {
        self.vertex(movie_key)
            .and_then(|vertex| vertex.movie_attributes().copied())
    }
}

impl MovieAttributeLookup for FxHashMap<String, MovieAttributes> {
    fn attributes_of(&self, movie_key: &str) -> Option<MovieAttributes> {
        self.get(movie_key).copied()
    }
}

/// Options shared by path and recommendation queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Restrict traversed or recommended movies to an attribute range
    pub filter: Option<AttributeFilter>,
    /// Maximum number of recommendations returned
    pub recommendation_limit: usize,
}

impl QueryConfig {
    pub fn new(filter: Option<AttributeFilter>, recommendation_limit: usize) -> Self {
        Self {
            filter,
            recommendation_limit,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            filter: None,
            recommendation_limit: 10,
        }
    }
}
