/// Configuration validation
///
/// Lints a Relay config for settings that resolve fine but probably do not
/// do what the user meant. Findings are logged and returned; they never
/// change how the config resolves.
use super::language::LanguagePlugin;
use super::schema::RawUserConfig;
use tracing::warn;

/// Schema file extensions the language server can load
const SCHEMA_EXTENSIONS: &[&str] = &[".graphql", ".graphqls", ".gql", ".json"];

/// Validate a raw config, returning one message per finding
pub fn validate_raw_config(config: &RawUserConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    validate_schema(config, &mut warnings);
    validate_src(config, &mut warnings);
    validate_fragments("include", config.include.as_deref(), &mut warnings);
    validate_fragments("exclude", config.exclude.as_deref(), &mut warnings);
    validate_language(config, &mut warnings);

    for message in &warnings {
        warn!("{}", message);
    }
    warnings
}

fn validate_schema(config: &RawUserConfig, warnings: &mut Vec<String>) {
    let Some(schema) = &config.schema else {
        return;
    };
    if schema.trim().is_empty() {
        warnings.push("'schema' is empty".to_string());
    } else if !SCHEMA_EXTENSIONS.iter().any(|ext| schema.ends_with(ext)) {
        warnings.push(format!(
            "Schema '{}' does not look like a GraphQL SDL or introspection JSON file",
            schema
        ));
    }
}

fn validate_src(config: &RawUserConfig, warnings: &mut Vec<String>) {
    if let Some(src) = &config.src {
        if src.trim().is_empty() {
            warnings.push("'src' is empty; globs will be relative to the working directory".to_string());
        }
    }
}

fn validate_fragments(field: &str, fragments: Option<&[String]>, warnings: &mut Vec<String>) {
    for fragment in fragments.unwrap_or_default() {
        if fragment.starts_with('/') {
            warnings.push(format!(
                "{} pattern '{}' is absolute but will be joined onto the source root",
                field, fragment
            ));
        }
        if fragment.split('/').any(|segment| segment == "..") {
            warnings.push(format!(
                "{} pattern '{}' reaches outside the source root",
                field, fragment
            ));
        }
        if let Err(e) = glob::Pattern::new(fragment) {
            warnings.push(format!(
                "{} pattern '{}' is not a valid glob: {}",
                field, fragment, e
            ));
        }
    }
}

fn validate_language(config: &RawUserConfig, warnings: &mut Vec<String>) {
    if let Some(language) = &config.language {
        if LanguagePlugin::parse(language).is_none() {
            warnings.push(format!(
                "Unsupported language plugin '{}'. Supported plugins: {}",
                language,
                LanguagePlugin::supported_names()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> RawUserConfig {
        RawUserConfig::default()
            .with_schema("data/schema.graphql")
            .with_src("src")
    }

    #[test]
    fn test_validate_clean_config() {
        let config = base_config()
            .with_include(["lib/**"])
            .with_exclude(["**/__generated__/**"])
            .with_language("typescript");
        assert!(validate_raw_config(&config).is_empty());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_raw_config(&RawUserConfig::default()).is_empty());
    }

    #[test]
    fn test_validate_absolute_fragment_warns() {
        let config = base_config().with_exclude(["/tmp/**"]);
        let warnings = validate_raw_config(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("absolute"));
    }

    #[test]
    fn test_validate_parent_segment_warns() {
        let config = base_config().with_include(["../shared/**"]);
        let warnings = validate_raw_config(&config);
        assert!(warnings.iter().any(|w| w.contains("outside the source root")));
    }

    #[test]
    fn test_validate_invalid_glob_warns() {
        let config = base_config().with_include(["lib/[a-"]);
        let warnings = validate_raw_config(&config);
        assert!(warnings.iter().any(|w| w.contains("not a valid glob")));
    }

    #[test]
    fn test_validate_unknown_language_warns() {
        let config = base_config().with_language("reason");
        let warnings = validate_raw_config(&config);
        assert!(warnings.iter().any(|w| w.contains("Unsupported language plugin 'reason'")));
    }

    #[test]
    fn test_validate_schema_extension_warns() {
        let config = base_config().with_schema("schema.txt");
        let warnings = validate_raw_config(&config);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_validate_empty_src_warns() {
        let config = base_config().with_src("  ");
        assert_eq!(validate_raw_config(&config).len(), 1);
    }
}
