pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::toml_config::TomlConfig;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::BuildEngine, pipeline::DeckPipeline};
pub use utils::error::{BuildError, Result};
