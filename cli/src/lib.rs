pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{BaconPathApp, LoadedData, resolve_dataset_path};
pub use args::{Args, Command, FilterArgs};
pub use utils::format_number;
