use baconpath_core::{
    ActorHop, Graph, NameLookup, PathResult, QueryConfig, Recommendation, actor_hops,
    average_bacon_number, average_bacon_ranking, bfs_find_path, bfs_find_path_filtered,
    recommendations,
};

use crate::args::FilterArgs;

#[derive(Debug)]
pub struct PathRequest {
    pub from_actor: String,
    pub to_actor: String,
    pub config: QueryConfig,
}

pub struct PathSearchResult {
    pub request: PathRequest,
    pub result: PathResult,
    pub hops: Vec<ActorHop>,
}

impl PathSearchResult {
    pub fn bacon_number(&self) -> Option<usize> {
        self.result.hops().map(|hops| hops / 2)
    }
}

/// An actor's average Bacon number and where it places them among all
/// connected actors.
pub struct AverageSummary {
    pub actor: String,
    pub average: f64,
    /// 1-based position in the ranking; `None` when the actor is unconnected
    pub rank: Option<usize>,
    pub ranked_actors: usize,
}

pub struct RecommendRequest {
    pub movie: String,
    pub config: QueryConfig,
}

pub fn create_path_request(
    actor1: &str,
    actor2: &str,
    filter: &FilterArgs,
    actors: &NameLookup,
) -> anyhow::Result<PathRequest> {
    Ok(PathRequest {
        from_actor: actors.find_key(actor1)?,
        to_actor: actors.find_key(actor2)?,
        config: QueryConfig {
            filter: filter.to_filter()?,
            ..QueryConfig::default()
        },
    })
}

pub fn execute_path_search(graph: &Graph, request: PathRequest) -> anyhow::Result<PathSearchResult> {
    let result = match &request.config.filter {
        Some(filter) => {
            bfs_find_path_filtered(graph, &request.from_actor, &request.to_actor, filter, graph)?
        }
        None => bfs_find_path(graph, &request.from_actor, &request.to_actor)?,
    };
    let hops = actor_hops(graph, &result.path)?;

    Ok(PathSearchResult {
        request,
        result,
        hops,
    })
}

pub fn create_recommend_request(
    movie: &str,
    limit: usize,
    filter: &FilterArgs,
    movies: &NameLookup,
) -> anyhow::Result<RecommendRequest> {
    Ok(RecommendRequest {
        movie: movies.find_key(movie)?,
        config: QueryConfig::new(filter.to_filter()?, limit),
    })
}

pub fn execute_recommendations(
    graph: &Graph,
    request: &RecommendRequest,
) -> anyhow::Result<Vec<Recommendation>> {
    Ok(recommendations(
        graph,
        &request.movie,
        request.config.recommendation_limit,
        request.config.filter.as_ref(),
    )?)
}

pub fn execute_average(
    graph: &Graph,
    actor: &str,
    actors: &NameLookup,
) -> anyhow::Result<AverageSummary> {
    let actor = actors.find_key(actor)?;
    let average = average_bacon_number(graph, &actor)?;
    let ranking = average_bacon_ranking(graph);
    let rank = ranking
        .iter()
        .position(|(ranked, _)| *ranked == actor)
        .map(|index| index + 1);

    Ok(AverageSummary {
        actor,
        average,
        rank,
        ranked_actors: ranking.len(),
    })
}
