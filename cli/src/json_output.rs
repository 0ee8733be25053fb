use baconpath_core::{ActorHop, AttributeFilter, Graph, Recommendation};
use serde::Serialize;

use crate::search::{AverageSummary, PathSearchResult, RecommendRequest};

#[derive(Serialize)]
pub struct JsonPathOutput {
    pub query: JsonPathQuery,
    pub result: JsonPathResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonPathQuery {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<AttributeFilter>,
}

#[derive(Serialize)]
pub struct JsonPathResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacon_number: Option<usize>,
    pub path: Vec<String>,
    pub hops: Vec<ActorHop>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
}

#[derive(Serialize)]
pub struct JsonAverageOutput {
    pub actor: String,
    /// `None` when the actor shares no film with anyone
    pub average_bacon_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub ranked_actors: usize,
}

#[derive(Serialize)]
pub struct JsonRankingEntry {
    pub rank: usize,
    pub actor: String,
    pub average_bacon_number: f64,
}

#[derive(Serialize)]
pub struct JsonRecommendOutput {
    pub movie: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<AttributeFilter>,
    pub recommendations: Vec<JsonRecommendation>,
}

#[derive(Serialize)]
pub struct JsonRecommendation {
    pub movie: String,
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

pub fn create_path_output(search: &PathSearchResult) -> JsonPathOutput {
    JsonPathOutput {
        query: JsonPathQuery {
            from: search.request.from_actor.clone(),
            to: search.request.to_actor.clone(),
            filter: search.request.config.filter,
        },
        result: JsonPathResult {
            found: search.result.found(),
            bacon_number: search.bacon_number(),
            path: search.result.path.clone(),
            hops: search.hops.clone(),
        },
        stats: JsonStats {
            search_time_ms: (search.result.elapsed_secs * 1000.0) as u64,
            nodes_explored: search.result.vertices_visited,
        },
    }
}

pub fn create_average_output(summary: &AverageSummary) -> JsonAverageOutput {
    JsonAverageOutput {
        actor: summary.actor.clone(),
        average_bacon_number: summary.average.is_finite().then_some(summary.average),
        rank: summary.rank,
        ranked_actors: summary.ranked_actors,
    }
}

pub fn create_ranking_output(ranking: &[(String, f64)]) -> Vec<JsonRankingEntry> {
    ranking
        .iter()
        .enumerate()
        .map(|(index, (actor, average))| JsonRankingEntry {
            rank: index + 1,
            actor: actor.clone(),
            average_bacon_number: *average,
        })
        .collect()
}

pub fn create_recommend_output(
    graph: &Graph,
    request: &RecommendRequest,
    recommended: &[Recommendation],
) -> JsonRecommendOutput {
    let recommendations = recommended
        .iter()
        .map(|recommendation| {
            let attributes = graph
                .movie_attributes(&recommendation.movie)
                .ok()
                .flatten();
            JsonRecommendation {
                movie: recommendation.movie.clone(),
                similarity: recommendation.similarity,
                year: attributes.map(|attrs| attrs.year),
                rating: attributes.map(|attrs| attrs.rating),
            }
        })
        .collect();

    JsonRecommendOutput {
        movie: request.movie.clone(),
        filter: request.config.filter,
        recommendations,
    }
}

pub fn print_json_output<T: Serialize>(json_output: &T) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
