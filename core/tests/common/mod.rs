#![allow(dead_code)]

use baconpath_core::{Graph, MovieAttributes, MovieRecord, build_graph};
use std::collections::BTreeSet;

pub fn record(movie: &str, cast: &[&str], year: i32, rating: f64) -> MovieRecord {
    MovieRecord {
        movie: movie.to_string(),
        cast: cast.iter().map(|name| name.to_string()).collect::<BTreeSet<_>>(),
        attributes: MovieAttributes::new(year, 1000, rating),
    }
}

/// A1, A2, A3 with M1(A1, A3), M2(A1, A2), M3(A2, A3).
pub fn triangle_graph() -> Graph {
    build_graph(&[
        record("M1", &["A1", "A3"], 1990, 6.0),
        record("M2", &["A1", "A2"], 2000, 7.5),
        record("M3", &["A2", "A3"], 2010, 8.0),
    ])
    .unwrap()
}

/// Bacon and Lithgow share Footloose (1984). Restricted to 1990s films the
/// only route left is Bacon - Apollo 13 - Hanks - Sleepless in Seattle -
/// Ryan - Cliffhanger - Lithgow. Hermit sits in a separate component.
pub struct FilmGraph {
    pub graph: Graph,
}

impl FilmGraph {
    pub fn create() -> Self {
        let graph = build_graph(&[
            record("Footloose", &["Kevin Bacon", "John Lithgow"], 1984, 6.6),
            record("Apollo 13", &["Kevin Bacon", "Tom Hanks"], 1995, 7.7),
            record("Sleepless in Seattle", &["Tom Hanks", "Meg Ryan"], 1993, 6.8),
            record("Cliffhanger", &["Meg Ryan", "John Lithgow"], 1993, 6.4),
            record("Solo Project", &["Hermit"], 2005, 5.0),
        ])
        .unwrap();
        Self { graph }
    }
}
