//! Error type for config loading and resolution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported language plugin '{name}'. Supported plugins: {supported}")]
    UnsupportedLanguage { name: String, supported: String },

    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed YAML in config file {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config file {path:?} is JavaScript and cannot be evaluated; use relay.config.json or .relayrc instead")]
    UnsupportedConfigFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
