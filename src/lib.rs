//! relay-apollo-config
//!
//! Derives an Apollo GraphQL language-server configuration from a Relay
//! compiler configuration: schema location, source globs, the Relay client
//! directives dump, and a validation rule set that accepts Relay documents.

pub mod config;
pub mod directives;
pub mod error;

pub use config::{generate_config, resolve, ConfigLoader, RawUserConfig, ResolvedServiceConfig};
pub use error::{ConfigError, Result};
