/// Configuration shapes: the user's Relay config going in and the Apollo
/// language-server config coming out
use super::language::LanguagePlugin;
use super::rules::ValidationRule;
use serde::{Deserialize, Serialize};

/// Relay compiler settings as written by the user
///
/// Every field is optional; an absent field means "use the default". Keys
/// this crate does not care about (`artifactDirectory`, `persistOutput`, ...)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserConfig {
    /// Path to the schema file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Source root that include/exclude fragments are relative to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Extra include fragments, added to the default include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Exclude fragments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Language plugin name (`javascript`, `typescript`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl RawUserConfig {
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(include.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(exclude.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Fully defaulted service settings for the language server
///
/// Built fresh by every call to [`super::resolver::resolve`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedServiceConfig {
    pub local_schema_file: String,
    pub language: LanguagePlugin,
    /// Source extensions scanned for embedded GraphQL
    pub extensions: Vec<String>,
    /// Include globs, qualified by the source root except the directives dump
    pub includes: Vec<String>,
    /// Exclude globs, qualified by the source root
    pub excludes: Vec<String>,
    pub validation_rules: Vec<ValidationRule>,
}

impl ResolvedServiceConfig {
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.validation_rules.iter().map(|rule| rule.name).collect()
    }
}

/// The `apollo.config.js` shape consumed by apollo-language-server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApolloConfig {
    pub client: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub service: LocalServiceConfig,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub validation_rules: Vec<ValidationRule>,
}

/// A service backed by a schema file on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalServiceConfig {
    pub name: String,
    pub local_schema_file: String,
}

/// Service name reported to the language server
pub const LOCAL_SERVICE_NAME: &str = "local";

impl From<ResolvedServiceConfig> for ApolloConfig {
    fn from(resolved: ResolvedServiceConfig) -> Self {
        Self {
            client: ClientConfig {
                service: LocalServiceConfig {
                    name: LOCAL_SERVICE_NAME.to_string(),
                    local_schema_file: resolved.local_schema_file,
                },
                includes: resolved.includes,
                excludes: resolved.excludes,
                validation_rules: resolved.validation_rules,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_config_all_fields_optional() {
        let raw: RawUserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawUserConfig::default());
    }

    #[test]
    fn test_raw_config_ignores_unknown_keys() {
        let raw: RawUserConfig = serde_json::from_str(
            r#"{"schema": "schema.graphql", "artifactDirectory": "./__generated__", "persistOutput": "q.json"}"#,
        )
        .unwrap();
        assert_eq!(raw.schema.as_deref(), Some("schema.graphql"));
        assert!(raw.src.is_none());
    }

    #[test]
    fn test_raw_config_from_yaml() {
        let raw: RawUserConfig = serde_yaml::from_str(
            "src: ./app\ninclude:\n  - 'lib/**'\nexclude:\n  - '**/legacy/**'\nlanguage: typescript\n",
        )
        .unwrap();
        assert_eq!(raw.src.as_deref(), Some("./app"));
        assert_eq!(raw.include, Some(vec!["lib/**".to_string()]));
        assert_eq!(raw.exclude, Some(vec!["**/legacy/**".to_string()]));
        assert_eq!(raw.language.as_deref(), Some("typescript"));
    }

    #[test]
    fn test_builders() {
        let raw = RawUserConfig::default()
            .with_schema("s.graphql")
            .with_src("src")
            .with_include(["a/**"])
            .with_exclude(vec!["b/**".to_string()])
            .with_language("typescript");
        assert_eq!(raw.schema.as_deref(), Some("s.graphql"));
        assert_eq!(raw.include, Some(vec!["a/**".to_string()]));
        assert_eq!(raw.exclude, Some(vec!["b/**".to_string()]));
    }
}
