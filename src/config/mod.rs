/// Configuration system for relay-apollo-config
///
/// This module turns a Relay compiler config into an Apollo language-server
/// config:
/// - Discovery of the user's Relay config on disk
/// - Defaulting of every unset field
/// - Source-root qualified include/exclude globs
/// - Relay-aware validation rule selection
///
/// Resolution itself is pure; only the loader touches the filesystem.
pub mod defaults;
pub mod language;
pub mod loader;
pub mod resolver;
pub mod rules;
pub mod schema;
pub mod validation;

// Re-export main types used by the binary and tests
pub use language::LanguagePlugin;
pub use loader::{ConfigLoader, LoadedConfig};
pub use resolver::{generate_config, join_glob, resolve};
pub use rules::{RuleSet, ValidationRule};
pub use schema::{ApolloConfig, RawUserConfig, ResolvedServiceConfig};
pub use validation::validate_raw_config;
