//! Built-in defaults used when the user config leaves a field unset.
//!
//! These mirror the relay-compiler defaults so that a project without any
//! Relay config still gets a usable language-server setup.

/// Schema file used when the user config has no `schema`
pub const DEFAULT_SCHEMA: &str = "./data/schema.graphql";

/// Source root used when the user config has no `src`
pub const DEFAULT_SRC: &str = "./src";

/// Exclude fragments applied under the default source root
pub const DEFAULT_EXCLUDES: &[&str] = &["**/node_modules/**", "**/__mocks__/**", "**/__generated__/**"];

/// relay-compiler release whose client directives are dumped
pub const RELAY_COMPILER_VERSION: &str = "9.1.0";

/// Directory the directives dump is installed into, relative to the project
pub const DIRECTIVES_DUMP_DIR: &str = "./node_modules/relay-apollo-config/dist";

/// The root-independent include entry for the directives dump
pub fn directives_dump_glob() -> String {
    format!(
        "{}/{}",
        DIRECTIVES_DUMP_DIR,
        crate::directives::dump_file_name(RELAY_COMPILER_VERSION)
    )
}
