//! Parser policy configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// What happens when a key repeats within one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// Keep every entry in arrival order. Lookups return the first.
    #[default]
    Preserve,
    /// Keep one entry per key; a later value replaces the earlier one in place.
    Overwrite,
}

/// How section names are normalized before lookup and insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCase {
    /// Names are stored exactly as written between the brackets.
    #[default]
    Preserve,
    /// Names are lowercased, so `[Server]` and `[server]` merge.
    Lowercase,
}

/// How the value tokens following `=` become an entry's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePolicy {
    /// Join every value token with single spaces.
    #[default]
    Join,
    /// Keep only the first value token; the rest are discarded.
    First,
}

/// Policies applied by the [`Parser`](crate::Parser).
///
/// Can be loaded from JSON or JSONC:
///
/// ```json
/// { "duplicate_keys": "overwrite", "section_case": "lowercase", "values": "join" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    pub duplicate_keys: DuplicateKeys,
    pub section_case: SectionCase,
    pub values: ValuePolicy,
}

impl ParserOptions {
    /// Creates options with every policy at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_section_case(mut self, policy: SectionCase) -> Self {
        self.section_case = policy;
        self
    }

    pub fn with_values(mut self, policy: ValuePolicy) -> Self {
        self.values = policy;
        self
    }

    /// Parses options from JSON. Comments and trailing commas are accepted.
    ///
    /// An empty document yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &jsonc_parser::ParseOptions::default())
            .map_err(|e| ConfigError::Syntax(e.to_string()))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        Ok(serde_json::from_value(value)?)
    }

    /// Applies the section-name policy to `name`.
    pub(crate) fn fold_section_name(&self, name: &str) -> String {
        match self.section_case {
            SectionCase::Preserve => name.to_owned(),
            SectionCase::Lowercase => name.to_lowercase(),
        }
    }
}
