/// Relay config discovery
///
/// Looks for a Relay config in a start directory and then each of its
/// ancestors, in the same places relay-compiler looks:
/// 1. `package.json` (the `"relay"` key)
/// 2. `.relayrc` (JSON or YAML)
/// 3. `.relayrc.json`
/// 4. `.relayrc.yaml` / `.relayrc.yml`
/// 5. `.relayrc.js` / `relay.config.js` (reported as unsupported)
/// 6. `relay.config.json`
///
/// The first match wins. Read and parse failures are returned, not skipped.
use super::schema::RawUserConfig;
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File names checked in every directory, in priority order
pub const SEARCH_PLACES: &[&str] = &[
    "package.json",
    ".relayrc",
    ".relayrc.json",
    ".relayrc.yaml",
    ".relayrc.yml",
    ".relayrc.js",
    "relay.config.js",
    "relay.config.json",
];

/// Key holding the Relay config inside `package.json`
const PACKAGE_JSON_KEY: &str = "relay";

/// A config found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: RawUserConfig,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    stop_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not search above this directory
    pub fn with_stop_dir(mut self, stop_dir: impl Into<PathBuf>) -> Self {
        self.stop_dir = Some(stop_dir.into());
        self
    }

    /// Search `start_dir` and its ancestors for a Relay config
    ///
    /// Relative start directories are resolved against the working
    /// directory first, so `.` walks up through real parents.
    /// Returns `Ok(None)` when no config exists anywhere on the path.
    pub fn search(&self, start_dir: &Path) -> Result<Option<LoadedConfig>> {
        let start = fs::canonicalize(start_dir).map_err(|source| ConfigError::Io {
            path: start_dir.to_path_buf(),
            source,
        })?;
        let stop = self
            .stop_dir
            .as_deref()
            .map(|dir| fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()));

        for dir in start.ancestors() {
            if let Some(found) = self.search_dir(dir)? {
                info!("Loaded Relay config from {:?}", found.path);
                return Ok(Some(found));
            }
            if stop.as_deref() == Some(dir) {
                break;
            }
        }
        debug!("No Relay config found above {:?}", start_dir);
        Ok(None)
    }

    fn search_dir(&self, dir: &Path) -> Result<Option<LoadedConfig>> {
        for place in SEARCH_PLACES {
            let path = dir.join(place);
            if !path.is_file() {
                continue;
            }
            if let Some(config) = Self::load_file(&path)? {
                return Ok(Some(LoadedConfig { config, path }));
            }
        }
        Ok(None)
    }

    /// Load one config file
    ///
    /// Returns `Ok(None)` for a `package.json` without a `"relay"` key or
    /// with `"relay": null`.
    pub fn load_file(path: &Path) -> Result<Option<RawUserConfig>> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        if file_name.ends_with(".js") {
            return Err(ConfigError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match file_name {
            "package.json" => {
                let package: Value = parse_json(path, &content)?;
                match package.get(PACKAGE_JSON_KEY) {
                    Some(relay) if !relay.is_null() => serde_json::from_value(relay.clone())
                        .map(Some)
                        .map_err(|source| ConfigError::Json {
                            path: path.to_path_buf(),
                            source,
                        }),
                    _ => {
                        debug!("{:?} has no \"{}\" config", path, PACKAGE_JSON_KEY);
                        Ok(None)
                    }
                }
            }
            name if name.ends_with(".json") => parse_json(path, &content).map(Some),
            // .relayrc may be either; YAML parses JSON too
            _ => parse_yaml(path, &content).map(Some),
        }
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_yaml(path: &Path, content: &str) -> Result<RawUserConfig> {
    // An empty rc file means "all defaults"
    if content.trim().is_empty() {
        return Ok(RawUserConfig::default());
    }
    serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
