pub mod bfs;
pub mod distance;
pub mod utils;

// Re-export the public functions
pub use bfs::{
    PathResult, bfs_find_path, bfs_find_path_filtered, connecting_movies, shortest_path,
    shortest_path_filtered,
};
pub use distance::{
    DistanceMap, average_bacon_number, average_bacon_ranking, average_distance, bacon_number,
    shortest_distance_map,
};
pub use utils::{ActorHop, actor_hops};
