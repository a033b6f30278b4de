/// Derives the language-server config from a Relay config
///
/// Resolution is a pure function of its input and the compiled-in defaults:
/// no I/O, no shared state. Missing fields fall back to defaults; the only
/// failure is an unknown language plugin.
use super::defaults::{directives_dump_glob, DEFAULT_EXCLUDES, DEFAULT_SCHEMA, DEFAULT_SRC};
use super::language::LanguagePlugin;
use super::rules::RuleSet;
use super::schema::{ApolloConfig, RawUserConfig, ResolvedServiceConfig};
use crate::error::{ConfigError, Result};
use tracing::debug;

/// Resolve a user config (or its absence) into service settings
pub fn resolve(raw: Option<&RawUserConfig>) -> Result<ResolvedServiceConfig> {
    let empty = RawUserConfig::default();
    let raw = raw.unwrap_or(&empty);

    let local_schema_file = match &raw.schema {
        Some(schema) => schema.clone(),
        None => {
            debug!("No schema configured, using {}", DEFAULT_SCHEMA);
            DEFAULT_SCHEMA.to_string()
        }
    };

    let src = match &raw.src {
        Some(src) => src.as_str(),
        None => {
            debug!("No source root configured, using {}", DEFAULT_SRC);
            DEFAULT_SRC
        }
    };

    let language = resolve_language(raw.language.as_deref())?;
    let dump = directives_dump_glob();

    let mut includes = vec![join_glob(src, &language.include_glob())];
    for fragment in raw.include.iter().flatten() {
        push_unique(&mut includes, join_glob(src, fragment));
    }
    includes.retain(|entry| entry != &dump);
    includes.push(dump);

    let mut excludes = Vec::new();
    if raw.src.is_none() {
        for fragment in DEFAULT_EXCLUDES {
            push_unique(&mut excludes, join_glob(src, fragment));
        }
    }
    for fragment in raw.exclude.iter().flatten() {
        push_unique(&mut excludes, join_glob(src, fragment));
    }

    let validation_rules = RuleSet::for_relay().into_vec();

    debug!(
        "Resolved {} include(s), {} exclude(s), {} validation rule(s)",
        includes.len(),
        excludes.len(),
        validation_rules.len()
    );

    Ok(ResolvedServiceConfig {
        local_schema_file,
        language,
        extensions: language
            .input_extensions()
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        includes,
        excludes,
        validation_rules,
    })
}

/// Resolve and wrap in the shape apollo-language-server reads
pub fn generate_config(raw: Option<&RawUserConfig>) -> Result<ApolloConfig> {
    resolve(raw).map(ApolloConfig::from)
}

fn resolve_language(name: Option<&str>) -> Result<LanguagePlugin> {
    match name {
        None => Ok(LanguagePlugin::default()),
        Some(name) => LanguagePlugin::parse(name).ok_or_else(|| ConfigError::UnsupportedLanguage {
            name: name.to_string(),
            supported: LanguagePlugin::supported_names(),
        }),
    }
}

/// Join a glob fragment onto a source root
///
/// `root` is kept verbatim as the prefix. A leading `./` or `/` on the
/// fragment is dropped so the result has a single separator.
pub fn join_glob(root: &str, fragment: &str) -> String {
    let fragment = fragment.trim_start_matches("./").trim_start_matches('/');
    if root.is_empty() {
        return fragment.to_string();
    }
    if fragment.is_empty() {
        return root.to_string();
    }
    if root.ends_with('/') {
        format!("{}{}", root, fragment)
    } else {
        format!("{}/{}", root, fragment)
    }
}

fn push_unique(entries: &mut Vec<String>, entry: String) {
    if !entries.contains(&entry) {
        entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::RELAY_COMPILER_VERSION;

    fn base_config() -> RawUserConfig {
        RawUserConfig::default()
            .with_schema("path/to/schema.graphql")
            .with_src("path/to/src-root")
    }

    #[test]
    fn test_join_glob() {
        assert_eq!(join_glob("src", "**/*.js"), "src/**/*.js");
        assert_eq!(join_glob("src/", "**/*.js"), "src/**/*.js");
        assert_eq!(join_glob("./src", "./lib/**"), "./src/lib/**");
        assert_eq!(join_glob("src", "/abs/**"), "src/abs/**");
        assert_eq!(join_glob("", "lib/**"), "lib/**");
        assert_eq!(join_glob("src", ""), "src");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let resolved = resolve(None).unwrap();
        assert_eq!(resolved.local_schema_file, DEFAULT_SCHEMA);
        assert_eq!(resolved.includes[0], "./src/**/*.{graphql,js,jsx}");
        assert_eq!(resolved.language, LanguagePlugin::JavaScript);
        assert_eq!(resolved.extensions, vec!["js", "jsx"]);
    }

    #[test]
    fn test_default_root_gets_default_excludes() {
        let resolved = resolve(Some(&RawUserConfig::default())).unwrap();
        assert_eq!(
            resolved.excludes,
            vec![
                "./src/**/node_modules/**",
                "./src/**/__mocks__/**",
                "./src/**/__generated__/**",
            ]
        );
    }

    #[test]
    fn test_custom_root_starts_with_no_excludes() {
        let resolved = resolve(Some(&base_config())).unwrap();
        assert!(resolved.excludes.is_empty());
    }

    #[test]
    fn test_dump_entry_is_last_and_unique() {
        let resolved = resolve(Some(&base_config())).unwrap();
        let dump = directives_dump_glob();
        assert_eq!(resolved.includes.last(), Some(&dump));
        assert_eq!(resolved.includes.iter().filter(|e| **e == dump).count(), 1);
        assert!(dump.contains(RELAY_COMPILER_VERSION));
    }

    #[test]
    fn test_user_include_matching_dump_is_not_duplicated() {
        let raw = RawUserConfig::default()
            .with_src(crate::config::defaults::DIRECTIVES_DUMP_DIR)
            .with_include(["relay-compiler-directives-v9.1.0.graphql"]);
        let resolved = resolve(Some(&raw)).unwrap();
        let dump = directives_dump_glob();
        assert_eq!(resolved.includes.iter().filter(|e| **e == dump).count(), 1);
    }

    #[test]
    fn test_duplicate_excludes_collapse() {
        let raw = base_config().with_exclude(["gen/**", "gen/**"]);
        let resolved = resolve(Some(&raw)).unwrap();
        assert_eq!(resolved.excludes, vec!["path/to/src-root/gen/**"]);
    }

    #[test]
    fn test_typescript_plugin() {
        let resolved = resolve(Some(&base_config().with_language("typescript"))).unwrap();
        assert_eq!(resolved.includes[0], "path/to/src-root/**/*.{graphql,ts,tsx}");
        assert_eq!(resolved.extensions, vec!["ts", "tsx"]);
    }

    #[test]
    fn test_unknown_plugin_fails() {
        let err = resolve(Some(&base_config().with_language("reason"))).unwrap_err();
        match err {
            ConfigError::UnsupportedLanguage { name, supported } => {
                assert_eq!(name, "reason");
                assert_eq!(supported, "javascript, typescript");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_generate_config_envelope() {
        let config = generate_config(Some(&base_config())).unwrap();
        assert_eq!(config.client.service.name, "local");
        assert_eq!(config.client.service.local_schema_file, "path/to/schema.graphql");
        assert!(config
            .client
            .includes
            .contains(&"path/to/src-root/**/*.{graphql,js,jsx}".to_string()));
    }
}
