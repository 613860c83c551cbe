pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::core::fragment::{
    BODY_CLOSE, DEFAULT_IMAGE_EXT, DEFAULT_IMAGE_FOLDER, DEFAULT_SCRIPT_URL,
};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "deck-build")]
#[command(about = "Compose a slide deck and inject twemoji rendering into the output HTML")]
pub struct CliConfig {
    #[arg(long, default_value = "big-presentation-compose")]
    pub compose_command: String,

    #[arg(long, value_delimiter = ',')]
    pub compose_args: Vec<String>,

    #[arg(long, default_value = ".")]
    pub working_dir: String,

    #[arg(long, default_value = "index.html")]
    pub target_file: String,

    #[arg(long, default_value = BODY_CLOSE)]
    pub body_marker: String,

    #[arg(long, default_value = DEFAULT_SCRIPT_URL)]
    pub script_url: String,

    #[arg(long, default_value = DEFAULT_IMAGE_FOLDER)]
    pub image_folder: String,

    #[arg(long, default_value = DEFAULT_IMAGE_EXT)]
    pub image_ext: String,

    #[arg(long, help = "Load pipeline settings from a TOML file instead of CLI flags")]
    pub config: Option<String>,

    #[arg(long, help = "Skip the compose step and only patch the existing file")]
    pub patch_only: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn compose_command(&self) -> &str {
        &self.compose_command
    }

    fn compose_args(&self) -> &[String] {
        &self.compose_args
    }

    fn working_dir(&self) -> &str {
        &self.working_dir
    }

    fn target_file(&self) -> &str {
        &self.target_file
    }

    fn body_marker(&self) -> &str {
        &self.body_marker
    }

    fn script_url(&self) -> &str {
        &self.script_url
    }

    fn image_folder(&self) -> &str {
        &self.image_folder
    }

    fn image_ext(&self) -> &str {
        &self.image_ext
    }

    fn patch_only(&self) -> bool {
        self.patch_only
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("compose_command", &self.compose_command)?;
        validate_path("working_dir", &self.working_dir)?;
        validate_path("target_file", &self.target_file)?;
        validate_non_empty_string("body_marker", &self.body_marker)?;
        validate_url("script_url", &self.script_url)?;
        validate_non_empty_string("image_folder", &self.image_folder)?;
        validate_non_empty_string("image_ext", &self.image_ext)?;
        Ok(())
    }
}
