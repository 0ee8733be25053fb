use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::GraphError;
use crate::graph::{Graph, MovieAttributes, VertexKind};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is empty, expected a header row")]
    MissingHeader,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// One movie with its full cast, merged from per-actor dataset rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie: String,
    pub cast: BTreeSet<String>,
    pub attributes: MovieAttributes,
}

const COLUMNS: usize = 5;

/// Parses `actor,movie,year,votes,rating` rows (after a header row). Rows
/// for the same movie merge into one record, keeping the attributes of the
/// first row. Records come back in order of first appearance.
pub fn parse_movie_records<R: BufRead>(reader: R) -> Result<Vec<MovieRecord>, LoadError> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(LoadError::MissingHeader),
    }

    let mut records: Vec<MovieRecord> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();
    let mut row_count = 0;

    for (index, line) in lines.enumerate() {
        let line_number = index + 2;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_csv_line(&line);
        if fields.len() < COLUMNS {
            return Err(LoadError::Parse {
                line: line_number,
                reason: format!("expected {} columns, found {}", COLUMNS, fields.len()),
            });
        }

        let actor = fields[0].trim().to_string();
        let movie = fields[1].trim().to_string();
        row_count += 1;

        match positions.get(&movie) {
            Some(&position) => {
                records[position].cast.insert(actor);
            }
            None => {
                let attributes = MovieAttributes::new(
                    parse_year(&fields[2], line_number)?,
                    parse_field(&fields[3], "votes", line_number)?,
                    parse_field(&fields[4], "rating", line_number)?,
                );
                positions.insert(movie.clone(), records.len());
                records.push(MovieRecord {
                    movie,
                    cast: BTreeSet::from([actor]),
                    attributes,
                });
            }
        }
    }

    debug!(rows = row_count, movies = records.len(), "parsed movie dataset");
    Ok(records)
}

pub fn load_movie_records(dataset_path: &Path) -> Result<Vec<MovieRecord>, LoadError> {
    let file = File::open(dataset_path)?;
    parse_movie_records(BufReader::new(file))
}

/// Builds the bipartite graph: each movie links to every member of its cast.
///
/// Actors and movies share one key space, and the first vertex to claim a
/// name keeps it. A movie titled like a loaded actor is skipped, and so is
/// an appearance by an actor named like a loaded movie.
pub fn build_graph(records: &[MovieRecord]) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();

    for record in records {
        if graph.kind(&record.movie) == Some(VertexKind::Actor) {
            warn!(movie = %record.movie, "skipping movie whose title is an actor's name");
            continue;
        }
        graph.add_vertex(&record.movie, VertexKind::Movie);

        let cast: Vec<&String> = record
            .cast
            .iter()
            .filter(|actor| {
                let clashes = graph.kind(actor.as_str()) == Some(VertexKind::Movie);
                if clashes {
                    warn!(
                        actor = %actor,
                        movie = %record.movie,
                        "skipping actor named like a movie"
                    );
                }
                !clashes
            })
            .collect();
        graph.set_movie_attributes(
            &record.movie,
            cast.iter().map(|actor| actor.to_string()),
            record.attributes,
        )?;

        for actor in cast {
            graph.add_vertex(actor, VertexKind::Actor);
            graph.record_appearance(actor, &record.movie)?;
            graph.add_edge(actor, &record.movie)?;
        }
    }

    Ok(graph)
}

pub fn load_graph(dataset_path: &Path) -> Result<Graph, LoadError> {
    let records = load_movie_records(dataset_path)?;
    let graph = build_graph(&records)?;
    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "loaded graph from {}",
        dataset_path.display()
    );
    Ok(graph)
}

fn parse_year(field: &str, line: usize) -> Result<i32, LoadError> {
    let value: f64 = parse_field(field, "year", line)?;
    Ok(value.trunc() as i32)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str, line: usize) -> Result<T, LoadError> {
    field.trim().parse().map_err(|_| LoadError::Parse {
        line,
        reason: format!("invalid {} '{}'", name, field.trim()),
    })
}

/// Splits one CSV line, honouring double-quoted fields and `""` escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
