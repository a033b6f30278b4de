/// Validation rule catalogue and the Relay rule policy
///
/// The Apollo language server validates documents with graphql-js's
/// specified rules plus a few of its own. Some of those rules reject valid
/// Relay documents (fragment arguments declared through
/// `@argumentDefinitions`, variables supplied by `@arguments`), so they are
/// swapped for Relay-aware replacements.
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Where a rule implementation comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleOrigin {
    /// graphql-js `specifiedRules`
    GraphQl,
    /// apollo-language-server additions
    Apollo,
    /// Relay-aware replacements shipped with this crate
    Relay,
}

/// A named document validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationRule {
    pub name: &'static str,
    pub origin: RuleOrigin,
    pub description: &'static str,
}

impl ValidationRule {
    const fn new(name: &'static str, origin: RuleOrigin, description: &'static str) -> Self {
        Self {
            name,
            origin,
            description,
        }
    }
}

// Downstream tooling looks rules up by name.
impl Serialize for ValidationRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

use RuleOrigin::{Apollo, GraphQl, Relay};

/// Rules the language server runs by default, in its order
pub const DEFAULT_RULES: &[ValidationRule] = &[
    ValidationRule::new("NoAnonymousQueries", Apollo, "Operations must be named"),
    ValidationRule::new("NoTypenameAlias", Apollo, "__typename must not be aliased"),
    ValidationRule::new(
        "NoMissingClientDirectives",
        Apollo,
        "Client-only fields must carry @client",
    ),
    ValidationRule::new(
        "ExecutableDefinitions",
        GraphQl,
        "Documents contain only operations and fragments",
    ),
    ValidationRule::new("UniqueOperationNames", GraphQl, "Operation names are unique"),
    ValidationRule::new(
        "LoneAnonymousOperation",
        GraphQl,
        "An anonymous operation must be alone",
    ),
    ValidationRule::new(
        "SingleFieldSubscriptions",
        GraphQl,
        "Subscriptions select one root field",
    ),
    ValidationRule::new("KnownTypeNames", GraphQl, "Referenced types exist"),
    ValidationRule::new(
        "FragmentsOnCompositeTypes",
        GraphQl,
        "Fragments target composite types",
    ),
    ValidationRule::new(
        "VariablesAreInputTypes",
        GraphQl,
        "Variables have input types",
    ),
    ValidationRule::new("ScalarLeafs", GraphQl, "Leaf fields are scalars or enums"),
    ValidationRule::new(
        "FieldsOnCorrectType",
        GraphQl,
        "Selected fields exist on the parent type",
    ),
    ValidationRule::new("UniqueFragmentNames", GraphQl, "Fragment names are unique"),
    ValidationRule::new("KnownFragmentNames", GraphQl, "Spread fragments exist"),
    ValidationRule::new(
        "PossibleFragmentSpreads",
        GraphQl,
        "Spreads can apply to the parent type",
    ),
    ValidationRule::new("NoFragmentCycles", GraphQl, "Fragments do not spread themselves"),
    ValidationRule::new("UniqueVariableNames", GraphQl, "Variable names are unique"),
    ValidationRule::new(
        "NoUndefinedVariables",
        GraphQl,
        "Used variables are defined by the operation",
    ),
    ValidationRule::new("NoUnusedVariables", GraphQl, "Defined variables are used"),
    ValidationRule::new("KnownDirectives", GraphQl, "Directives exist and are placed legally"),
    ValidationRule::new(
        "UniqueDirectivesPerLocation",
        GraphQl,
        "A directive appears once per location",
    ),
    ValidationRule::new("KnownArgumentNames", GraphQl, "Arguments are declared"),
    ValidationRule::new("UniqueArgumentNames", GraphQl, "Argument names are unique"),
    ValidationRule::new("ValuesOfCorrectType", GraphQl, "Literal values match their types"),
    ValidationRule::new(
        "ProvidedRequiredArguments",
        GraphQl,
        "Required arguments are supplied",
    ),
    ValidationRule::new(
        "VariablesInAllowedPosition",
        GraphQl,
        "Variables are used where their type is allowed",
    ),
    ValidationRule::new(
        "OverlappingFieldsCanBeMerged",
        GraphQl,
        "Selections with the same response name merge",
    ),
    ValidationRule::new(
        "UniqueInputFieldNames",
        GraphQl,
        "Input object fields are unique",
    ),
];

/// Rules that reject valid Relay documents
///
/// `@arguments` supplies variables that the operation never defines, and
/// `@argumentDefinitions` declares arguments the schema does not know about.
pub const RELAY_EXCLUDED_RULES: &[&str] = &[
    "KnownArgumentNames",
    "NoUndefinedVariables",
    "VariablesInAllowedPosition",
];

/// Relay-aware rules appended after the surviving defaults
pub const RELAY_INCLUDED_RULES: &[ValidationRule] = &[
    ValidationRule::new(
        "RelayKnownArgumentNames",
        Relay,
        "Arguments are declared by the schema or by @argumentDefinitions",
    ),
    ValidationRule::new(
        "RelayKnownVariableNames",
        Relay,
        "Variables are defined by the operation or by @argumentDefinitions",
    ),
    ValidationRule::new(
        "RelayVariablesInAllowedPosition",
        Relay,
        "Variables, including fragment-local ones, fit their position",
    ),
    ValidationRule::new(
        "RelayArgumentsOfCorrectType",
        Relay,
        "@arguments values match their @argumentDefinitions types",
    ),
    ValidationRule::new(
        "RelayDefaultValueOfCorrectType",
        Relay,
        "@argumentDefinitions defaults match their declared types",
    ),
    ValidationRule::new(
        "RelayNoUnusedArguments",
        Relay,
        "Every @argumentDefinitions entry is used",
    ),
    ValidationRule::new(
        "RelayCompatMissingConnectionDirective",
        Relay,
        "Connection fields in compat mode carry @connection",
    ),
];

/// An ordered set of rules keyed by name
///
/// Rule names are unique by construction: inserting a name that is already
/// present keeps the existing entry and its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: IndexMap<&'static str, ValidationRule>,
}

impl RuleSet {
    /// Build a set from rules in order, keeping the first of any duplicate name
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = &'a ValidationRule>) -> Self {
        let mut set = Self::default();
        for rule in rules {
            set.insert_if_absent(*rule);
        }
        set
    }

    /// The language server's default rules
    pub fn base() -> Self {
        Self::from_rules(DEFAULT_RULES)
    }

    /// The default rules with the Relay policy applied
    pub fn for_relay() -> Self {
        Self::base().with_policy(RELAY_EXCLUDED_RULES, RELAY_INCLUDED_RULES)
    }

    /// Remove every rule named in `excluded`, then append every rule in
    /// `included` that is not already present
    pub fn with_policy(mut self, excluded: &[&str], included: &[ValidationRule]) -> Self {
        for name in excluded {
            self.remove(name);
        }
        for rule in included {
            self.insert_if_absent(*rule);
        }
        self
    }

    /// Remove a rule by exact name, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<ValidationRule> {
        self.rules.shift_remove(name)
    }

    /// Append a rule unless one with the same name exists. Returns whether
    /// the rule was added.
    pub fn insert_if_absent(&mut self, rule: ValidationRule) -> bool {
        if self.rules.contains_key(rule.name) {
            return false;
        }
        self.rules.insert(rule.name, rule);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.values()
    }

    /// Rules in order, as handed to downstream tooling
    pub fn into_vec(self) -> Vec<ValidationRule> {
        self.rules.into_values().collect()
    }
}
