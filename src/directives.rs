//! Relay client-only directives
//!
//! The language server does not know about the directives relay-compiler
//! understands, so they are written to a versioned SDL file that every
//! resolved config includes. This module owns the catalogue, its SDL
//! rendering, and the dump file naming scheme.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every dump file name
pub const DUMP_FILE_PREFIX: &str = "relay-compiler-directives-v";

/// Extension of every dump file name
pub const DUMP_FILE_EXTENSION: &str = "graphql";

static DUMP_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^relay-compiler-directives-v(\d+\.\d+\.\d+)\.graphql$")
        .expect("dump file pattern is valid")
});

/// A directive argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveArgument {
    pub name: &'static str,
    pub type_ref: &'static str,
    pub default: Option<&'static str>,
}

/// A client-only directive definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [DirectiveArgument],
    pub locations: &'static [&'static str],
    pub repeatable: bool,
}

const fn arg(name: &'static str, type_ref: &'static str) -> DirectiveArgument {
    DirectiveArgument {
        name,
        type_ref,
        default: None,
    }
}

const fn arg_default(
    name: &'static str,
    type_ref: &'static str,
    default: &'static str,
) -> DirectiveArgument {
    DirectiveArgument {
        name,
        type_ref,
        default: Some(default),
    }
}

/// Directives understood by relay-compiler but absent from user schemas
pub const RELAY_DIRECTIVES: &[Directive] = &[
    Directive {
        name: "relay",
        description: "Fragment and field level Relay options",
        arguments: &[
            arg("mask", "Boolean"),
            arg("plural", "Boolean"),
        ],
        locations: &["FRAGMENT_DEFINITION", "FRAGMENT_SPREAD"],
        repeatable: false,
    },
    Directive {
        name: "arguments",
        description: "Supplies values for a fragment's @argumentDefinitions",
        arguments: &[],
        locations: &["FRAGMENT_SPREAD"],
        repeatable: false,
    },
    Directive {
        name: "argumentDefinitions",
        description: "Declares fragment-local arguments",
        arguments: &[],
        locations: &["FRAGMENT_DEFINITION"],
        repeatable: false,
    },
    Directive {
        name: "connection",
        description: "Marks a field as a Relay connection managed by the store",
        arguments: &[
            arg("key", "String!"),
            arg("filters", "[String]"),
            arg("handler", "String"),
            arg("dynamicKey_UNSTABLE", "String"),
        ],
        locations: &["FIELD"],
        repeatable: false,
    },
    Directive {
        name: "refetchable",
        description: "Generates a refetch query for the fragment",
        arguments: &[arg("queryName", "String!")],
        locations: &["FRAGMENT_DEFINITION"],
        repeatable: false,
    },
    Directive {
        name: "inline",
        description: "Reads the fragment inline instead of through a fragment reference",
        arguments: &[],
        locations: &["FRAGMENT_DEFINITION"],
        repeatable: false,
    },
    Directive {
        name: "match",
        description: "Selects a data-driven dependency by concrete type",
        arguments: &[arg("key", "String")],
        locations: &["FIELD"],
        repeatable: false,
    },
    Directive {
        name: "module",
        description: "Names the component module loaded for a @match branch",
        arguments: &[arg("name", "String!")],
        locations: &["FRAGMENT_SPREAD"],
        repeatable: false,
    },
    Directive {
        name: "raw_response_type",
        description: "Emits a raw response type for the operation",
        arguments: &[],
        locations: &["QUERY", "MUTATION", "SUBSCRIPTION"],
        repeatable: false,
    },
    Directive {
        name: "preloadable",
        description: "Generates a preloadable query artifact",
        arguments: &[],
        locations: &["QUERY"],
        repeatable: false,
    },
    Directive {
        name: "relay_test_operation",
        description: "Emits type metadata for mock payload generation",
        arguments: &[],
        locations: &["QUERY", "MUTATION", "SUBSCRIPTION"],
        repeatable: false,
    },
    Directive {
        name: "defer",
        description: "Delivers the fragment in a later payload",
        arguments: &[arg("label", "String"), arg_default("if", "Boolean", "true")],
        locations: &["FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        repeatable: false,
    },
    Directive {
        name: "stream",
        description: "Streams list items in later payloads",
        arguments: &[
            arg("label", "String"),
            arg("initial_count", "Int!"),
            arg_default("if", "Boolean", "true"),
        ],
        locations: &["FIELD"],
        repeatable: false,
    },
];

/// Look up a directive by name, without the leading `@`
pub fn find_directive(name: &str) -> Option<&'static Directive> {
    let name = name.strip_prefix('@').unwrap_or(name);
    RELAY_DIRECTIVES.iter().find(|directive| directive.name == name)
}

impl Directive {
    /// Render as an SDL `directive` definition
    pub fn to_sdl(&self) -> String {
        let mut sdl = format!("\"\"\"\n{}\n\"\"\"\ndirective @{}", self.description, self.name);
        if !self.arguments.is_empty() {
            let args = self
                .arguments
                .iter()
                .map(|a| match a.default {
                    Some(default) => format!("{}: {} = {}", a.name, a.type_ref, default),
                    None => format!("{}: {}", a.name, a.type_ref),
                })
                .collect::<Vec<_>>()
                .join(", ");
            sdl.push_str(&format!("({})", args));
        }
        if self.repeatable {
            sdl.push_str(" repeatable");
        }
        sdl.push_str(" on ");
        sdl.push_str(&self.locations.join(" | "));
        sdl
    }
}

/// Render the whole catalogue as the contents of a dump file
pub fn render_sdl(version: &str) -> String {
    let mut out = format!("# relay-compiler v{} client directives\n", version);
    for directive in RELAY_DIRECTIVES {
        out.push('\n');
        out.push_str(&directive.to_sdl());
        out.push('\n');
    }
    out
}

/// File name of the dump for a relay-compiler version
pub fn dump_file_name(version: &str) -> String {
    format!("{}{}.{}", DUMP_FILE_PREFIX, version, DUMP_FILE_EXTENSION)
}

/// Extract the version from a dump file name, if it is one
pub fn parse_dump_version(file_name: &str) -> Option<&str> {
    DUMP_FILE_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `file_name` is a dump written for a version other than `current`
pub fn is_stale_dump(file_name: &str, current: &str) -> bool {
    matches!(parse_dump_version(file_name), Some(version) if version != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dump_file_name() {
        assert_eq!(dump_file_name("9.1.0"), "relay-compiler-directives-v9.1.0.graphql");
    }

    #[test]
    fn test_parse_dump_version() {
        assert_eq!(
            parse_dump_version("relay-compiler-directives-v9.1.0.graphql"),
            Some("9.1.0")
        );
        assert_eq!(
            parse_dump_version("relay-compiler-directives-v10.12.3.graphql"),
            Some("10.12.3")
        );
        assert_eq!(parse_dump_version("relay-compiler-directives-v9.1.graphql"), None);
        assert_eq!(parse_dump_version("schema.graphql"), None);
    }

    #[test]
    fn test_is_stale_dump() {
        assert!(is_stale_dump("relay-compiler-directives-v8.0.0.graphql", "9.1.0"));
        assert!(!is_stale_dump("relay-compiler-directives-v9.1.0.graphql", "9.1.0"));
        assert!(!is_stale_dump("schema.graphql", "9.1.0"));
    }

    #[test]
    fn test_directive_names_unique() {
        let names: HashSet<_> = RELAY_DIRECTIVES.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), RELAY_DIRECTIVES.len());
    }

    #[test]
    fn test_find_directive() {
        assert!(find_directive("connection").is_some());
        assert!(find_directive("@argumentDefinitions").is_some());
        assert!(find_directive("client").is_none());
    }

    #[test]
    fn test_connection_sdl() {
        let sdl = find_directive("connection").unwrap().to_sdl();
        assert!(sdl.contains(
            "directive @connection(key: String!, filters: [String], handler: String, dynamicKey_UNSTABLE: String) on FIELD"
        ));
    }

    #[test]
    fn test_default_argument_sdl() {
        let sdl = find_directive("defer").unwrap().to_sdl();
        assert!(sdl.contains("if: Boolean = true"));
        assert!(sdl.ends_with("on FRAGMENT_SPREAD | INLINE_FRAGMENT"));
    }

    #[test]
    fn test_render_sdl_contains_every_directive() {
        let sdl = render_sdl("9.1.0");
        assert!(sdl.starts_with("# relay-compiler v9.1.0"));
        for directive in RELAY_DIRECTIVES {
            assert!(sdl.contains(&format!("directive @{}", directive.name)));
        }
    }
}
