use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to launch compose tool '{command}': {source}")]
    ComposeError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Target file is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Config file parsing failed: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Patch processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Compose,
    FileAccess,
    Processing,
}

impl BuildError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::ConfigError { .. }
            | BuildError::InvalidConfigValueError { .. }
            | BuildError::MissingConfigError { .. }
            | BuildError::TomlError(_) => ErrorCategory::Configuration,
            BuildError::ComposeError { .. } => ErrorCategory::Compose,
            BuildError::IoError(_) => ErrorCategory::FileAccess,
            BuildError::EncodingError(_) | BuildError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BuildError::ConfigError { .. }
            | BuildError::InvalidConfigValueError { .. }
            | BuildError::MissingConfigError { .. }
            | BuildError::TomlError(_) => ErrorSeverity::Medium,
            BuildError::ComposeError { .. } => ErrorSeverity::High,
            BuildError::IoError(_) => ErrorSeverity::Critical,
            BuildError::EncodingError(_) | BuildError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BuildError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Target file not found. The compose tool may not have produced it.".to_string()
            }
            BuildError::IoError(_) => "Could not read or write the target file.".to_string(),
            BuildError::ComposeError { command, .. } => {
                format!("Could not run the compose tool '{}'.", command)
            }
            BuildError::EncodingError(_) => {
                "The target file contains invalid UTF-8 text.".to_string()
            }
            BuildError::TomlError(_) => "The config file could not be parsed.".to_string(),
            BuildError::ConfigError { message } => message.clone(),
            BuildError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            BuildError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            BuildError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the CLI flags or the TOML config file for the reported field.".to_string()
            }
            ErrorCategory::Compose => {
                "Verify the compose tool is installed and on PATH, or pass --compose-command."
                    .to_string()
            }
            ErrorCategory::FileAccess => {
                "Run the compose step first, or check the target file path and permissions."
                    .to_string()
            }
            ErrorCategory::Processing => {
                "Inspect the generated HTML file and regenerate it with the compose tool."
                    .to_string()
            }
        }
    }
}
