use anyhow::{Context, bail};
use baconpath_core::{Graph, NameLookup, VertexKind, load_graph};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

pub const DATA_ENV_VAR: &str = "BACONPATH_DATA";
pub const DEFAULT_DATASET: &str = "data/full_dataset.csv";

/// Picks the dataset from the command line, then the environment, then the
/// default location.
pub fn resolve_dataset_path(cli_path: Option<String>, env_path: Option<String>) -> PathBuf {
    cli_path
        .or(env_path)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
}

pub struct BaconPathApp {
    pub dataset_path: PathBuf,
}

pub struct LoadedData {
    pub graph: Graph,
    pub actors: NameLookup,
    pub movies: NameLookup,
}

impl BaconPathApp {
    pub fn new(data_path: Option<String>) -> anyhow::Result<Self> {
        let dataset_path = resolve_dataset_path(data_path, std::env::var(DATA_ENV_VAR).ok());

        if !dataset_path.exists() {
            bail!(
                "Dataset not found: {:?}. Pass --data or set {}",
                dataset_path,
                DATA_ENV_VAR
            );
        }

        Ok(Self { dataset_path })
    }

    pub fn load_data(&self) -> anyhow::Result<LoadedData> {
        let load_timer = Instant::now();
        let graph = load_graph(&self.dataset_path)
            .with_context(|| format!("Failed to load dataset {:?}", self.dataset_path))?;
        debug!(
            elapsed_ms = load_timer.elapsed().as_millis() as u64,
            "graph ready"
        );

        let actors = NameLookup::build(&graph, VertexKind::Actor);
        let movies = NameLookup::build(&graph, VertexKind::Movie);

        Ok(LoadedData {
            graph,
            actors,
            movies,
        })
    }
}
