use crate::core::fragment::{
    BODY_CLOSE, DEFAULT_IMAGE_EXT, DEFAULT_IMAGE_FOLDER, DEFAULT_SCRIPT_URL,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: Option<PipelineInfo>,
    #[serde(default)]
    pub compose: ComposeSection,
    #[serde(default)]
    pub inject: InjectSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeSection {
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_working_dir")]
    pub working_dir: String,
    #[serde(default)]
    pub patch_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectSection {
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_script_url")]
    pub script_url: String,
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default = "default_ext")]
    pub ext: String,
}

fn default_command() -> String {
    "big-presentation-compose".to_string()
}

fn default_working_dir() -> String {
    ".".to_string()
}

fn default_target() -> String {
    "index.html".to_string()
}

fn default_marker() -> String {
    BODY_CLOSE.to_string()
}

fn default_script_url() -> String {
    DEFAULT_SCRIPT_URL.to_string()
}

fn default_folder() -> String {
    DEFAULT_IMAGE_FOLDER.to_string()
}

fn default_ext() -> String {
    DEFAULT_IMAGE_EXT.to_string()
}

impl Default for ComposeSection {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: vec![],
            working_dir: default_working_dir(),
            patch_only: false,
        }
    }
}

impl Default for InjectSection {
    fn default() -> Self {
        Self {
            target: default_target(),
            marker: default_marker(),
            script_url: default_script_url(),
            folder: default_folder(),
            ext: default_ext(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn compose_command(&self) -> &str {
        &self.compose.command
    }

    fn compose_args(&self) -> &[String] {
        &self.compose.args
    }

    fn working_dir(&self) -> &str {
        &self.compose.working_dir
    }

    fn target_file(&self) -> &str {
        &self.inject.target
    }

    fn body_marker(&self) -> &str {
        &self.inject.marker
    }

    fn script_url(&self) -> &str {
        &self.inject.script_url
    }

    fn image_folder(&self) -> &str {
        &self.inject.folder
    }

    fn image_ext(&self) -> &str {
        &self.inject.ext
    }

    fn patch_only(&self) -> bool {
        self.compose.patch_only
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("compose.command", &self.compose.command)?;
        validate_path("compose.working_dir", &self.compose.working_dir)?;
        validate_path("inject.target", &self.inject.target)?;
        validate_non_empty_string("inject.marker", &self.inject.marker)?;
        validate_url("inject.script_url", &self.inject.script_url)?;
        validate_non_empty_string("inject.folder", &self.inject.folder)?;
        validate_non_empty_string("inject.ext", &self.inject.ext)?;
        Ok(())
    }
}
