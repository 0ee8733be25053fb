pub mod error;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod query_config;
pub mod similarity;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{GraphError, Result};
pub use graph::{Graph, MovieAttributes, Vertex, VertexKind};
pub use parsing::{LoadError, MovieRecord, build_graph, load_graph, parse_movie_records};
pub use pathfinding::{
    ActorHop, DistanceMap, PathResult, actor_hops, average_bacon_number, average_bacon_ranking,
    average_distance, bacon_number, bfs_find_path, bfs_find_path_filtered, shortest_distance_map,
    shortest_path, shortest_path_filtered,
};
pub use query_config::{AttributeFilter, AttributeKey, MovieAttributeLookup, QueryConfig};
pub use similarity::{
    Recommendation, recommendation_graph, recommendations, recommendations_filtered, similarity,
};
pub use string_normalization::{NameLookup, clean_str};
