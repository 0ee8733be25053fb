use rustc_hash::FxHashMap;
use unidecode::unidecode;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexKind};

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Resolves loosely typed names ("beyonce", "  AMELIE ") to graph keys of
/// one vertex kind.
pub struct NameLookup {
    kind: VertexKind,
    by_clean_name: FxHashMap<String, Vec<String>>,
}

impl NameLookup {
    pub fn build(graph: &Graph, kind: VertexKind) -> Self {
        let mut by_clean_name: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for key in graph.all_keys(Some(kind)) {
            by_clean_name
                .entry(clean_str(key))
                .or_default()
                .push(key.to_string());
        }
        Self {
            kind,
            by_clean_name,
        }
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn find_key(&self, name: &str) -> Result<String> {
        let candidates = self
            .by_clean_name
            .get(&clean_str(name))
            .filter(|keys| !keys.is_empty())
            .ok_or_else(|| GraphError::not_found(name))?;

        if let Some(exact) = candidates.iter().find(|key| key.as_str() == name) {
            return Ok(exact.clone());
        }

        // Multiple matches - prioritize exact match (case-insensitive)
        let lowercase_query = name.trim().to_lowercase();
        let best = candidates
            .iter()
            .find(|key| key.to_lowercase() == lowercase_query)
            .unwrap_or(&candidates[0]);
        Ok(best.clone())
    }
}
