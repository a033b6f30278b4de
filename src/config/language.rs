/// Relay language plugins and the source extensions they compile
///
/// The plugin decides which files the language server should scan: the
/// include glob is always `**/*.{graphql,<input extensions>}`.
use serde::Serialize;

/// Language plugins understood by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePlugin {
    /// relay-compiler's built-in plugin (`.js`, `.jsx`)
    #[default]
    JavaScript,

    /// relay-compiler-language-typescript (`.ts`, `.tsx`)
    TypeScript,
}

impl LanguagePlugin {
    /// All registered plugins, in the order reported by error messages
    pub const ALL: [LanguagePlugin; 2] = [LanguagePlugin::JavaScript, LanguagePlugin::TypeScript];

    /// Parse a plugin from the `language` field of a Relay config
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Package-style names (`relay-compiler-language-typescript`) are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" => Some(LanguagePlugin::JavaScript),
            "typescript" | "ts" | "relay-compiler-language-typescript" => {
                Some(LanguagePlugin::TypeScript)
            }
            _ => None,
        }
    }

    /// Canonical name as written in a Relay config
    pub fn name(&self) -> &'static str {
        match self {
            LanguagePlugin::JavaScript => "javascript",
            LanguagePlugin::TypeScript => "typescript",
        }
    }

    /// Source file extensions the plugin extracts GraphQL from
    pub fn input_extensions(&self) -> &'static [&'static str] {
        match self {
            LanguagePlugin::JavaScript => &["js", "jsx"],
            LanguagePlugin::TypeScript => &["ts", "tsx"],
        }
    }

    /// Include glob suffix, joined onto the source root by the resolver
    pub fn include_glob(&self) -> String {
        format!("**/*.{{graphql,{}}}", self.input_extensions().join(","))
    }

    /// Comma-separated plugin names for diagnostics
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|plugin| plugin.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
