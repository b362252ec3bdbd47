#![forbid(unsafe_code)]

//! Parsing for the publish-gate TOML configuration document
//!
//! Loading is deliberately forgiving. A missing file means "no rules"; an
//! unreadable or syntactically broken file is logged and also means "no
//! rules"; a malformed rule entry is logged and skipped without aborting
//! the remaining entries. An unparsable `max_nodes` degrades to `-1`, which
//! keeps the rule registered but inert. The gate must never stop the host
//! from starting because of its own configuration.
//!
//! Document shape:
//!
//! ```toml
//! [gate]
//! property_alias = "maxPublishedNodes"
//! warn_on_property_limit = true
//!
//! [[rule]]
//! parent_doc_type = "page"
//! child_doc_type = "article"
//! max_nodes = 3
//! scope = "direct"
//! show_warnings = true
//! custom_message = ""
//! custom_message_category = ""
//! custom_warning_message = ""
//! custom_warning_message_category = ""
//! ```

use crate::error::ConfigError;
use crate::rules::Rule;
use crate::types::{DocTypeMatch, Scope};
use std::path::Path;
use toml::Value;
use tracing::{error, warn};

/// Parsed configuration: engine options plus rule entries in document order
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Name of the per-node override attribute; None disables overrides
    pub property_alias: Option<String>,

    /// Whether rules synthesized from the override attribute emit warnings
    pub warn_on_property_limit: bool,

    /// Rule entries in document order (which fixes their precedence)
    pub rules: Vec<RuleEntry>,
}

/// One `[[rule]]` entry from the configuration document
#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub parent_doc_type: DocTypeMatch,
    pub child_doc_type: DocTypeMatch,
    pub max_nodes: i64,
    pub scope: Scope,
    pub show_warnings: bool,
    pub custom_message: String,
    pub custom_message_category: String,
    pub custom_warning_message: String,
    pub custom_warning_message_category: String,
}

impl RuleEntry {
    /// Converts this entry into a Rule
    pub fn into_rule(self) -> Rule {
        Rule::new(self.parent_doc_type, self.child_doc_type, self.max_nodes)
            .with_scope(self.scope)
            .with_warnings(self.show_warnings)
            .with_block_message(self.custom_message)
            .with_block_category(self.custom_message_category)
            .with_warning_message(self.custom_warning_message)
            .with_warning_category(self.custom_warning_message_category)
    }
}

impl Config {
    /// Loads configuration from a file, degrading to defaults on failure
    ///
    /// An absent file silently yields the default (zero rules, no override
    /// attribute). Any read or syntax error is logged and yields the same
    /// default; this never fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Config::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read gate configuration");
                return Config::default();
            }
        };

        match Config::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to parse gate configuration");
                Config::default()
            }
        }
    }

    /// Parses configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSyntax` only when the document itself is
    /// not valid TOML. Malformed individual entries are logged and skipped,
    /// not errors.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let doc: Value =
            toml::from_str(s).map_err(|e| ConfigError::InvalidSyntax(e.to_string()))?;

        let mut config = Config::default();

        if let Some(gate) = doc.get("gate") {
            config.property_alias = gate
                .get("property_alias")
                .and_then(Value::as_str)
                .filter(|alias| !alias.is_empty())
                .map(str::to_string);
            config.warn_on_property_limit = gate
                .get("warn_on_property_limit")
                .and_then(Value::as_bool)
                .unwrap_or(false);
        }

        let entries = doc.get("rule").and_then(Value::as_array);
        if let Some(entries) = entries {
            for (index, entry) in entries.iter().enumerate() {
                match parse_entry(entry) {
                    Ok(entry) => config.rules.push(entry),
                    Err(e) => {
                        warn!(index, error = %e, "skipping malformed rule entry");
                    }
                }
            }
        }

        Ok(config)
    }
}

/// Parses one rule entry table
///
/// The two doc-type fields are required; a missing or empty one rejects the
/// entry. Everything else falls back: `max_nodes` that is not an integer
/// (or an integer-bearing string) becomes `-1` and leaves the rule inert,
/// booleans that fail to parse become `false`, and absent strings become
/// empty.
fn parse_entry(entry: &Value) -> Result<RuleEntry, ConfigError> {
    let table = entry
        .as_table()
        .ok_or_else(|| ConfigError::InvalidSyntax("rule entry is not a table".to_string()))?;

    let parent_doc_type = required_doc_type(table, "parent_doc_type")?;
    let child_doc_type = required_doc_type(table, "child_doc_type")?;

    let max_nodes = match table.get("max_nodes") {
        Some(value) => lenient_integer(value),
        None => return Err(ConfigError::MissingField("max_nodes".to_string())),
    };

    let scope = table
        .get("scope")
        .and_then(Value::as_str)
        .and_then(|s| match s {
            "direct" => Some(Scope::DirectChildren),
            "descendants" => Some(Scope::Descendants),
            _ => None,
        })
        .unwrap_or_default();

    let show_warnings = table
        .get("show_warnings")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(RuleEntry {
        parent_doc_type,
        child_doc_type,
        max_nodes,
        scope,
        show_warnings,
        custom_message: optional_string(table, "custom_message"),
        custom_message_category: optional_string(table, "custom_message_category"),
        custom_warning_message: optional_string(table, "custom_warning_message"),
        custom_warning_message_category: optional_string(table, "custom_warning_message_category"),
    })
}

fn required_doc_type(
    table: &toml::map::Map<String, Value>,
    field: &str,
) -> Result<DocTypeMatch, ConfigError> {
    let value = table
        .get(field)
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))?;
    let alias = value.as_str().ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        message: "expected a string".to_string(),
    })?;
    DocTypeMatch::new(alias).ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        message: "must not be empty".to_string(),
    })
}

fn lenient_integer(value: &Value) -> i64 {
    match value {
        Value::Integer(n) => *n,
        Value::String(s) => s.parse().unwrap_or(-1),
        _ => -1,
    }
}

fn optional_string(table: &toml::map::Map<String, Value>, field: &str) -> String {
    table
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
