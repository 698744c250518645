//! Field alias map used by the shorthand parser.
//!
//! Aliases map the prefix a user types (`status:open`) to the name of the
//! search index field it targets. An empty field name keeps the prefix
//! itself as the field, so an alias file can whitelist fields without
//! renaming them:
//!
//! ```toml
//! status = ""
//! priority = "issue_priority"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mapping of shorthand prefixes to index field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAliases {
    aliases: HashMap<String, String>,
}

impl FieldAliases {
    /// Create an empty alias map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias, replacing any previous mapping for it.
    pub fn insert(&mut self, alias: impl Into<String>, field: impl Into<String>) -> &mut Self {
        self.aliases.insert(alias.into(), field.into());
        self
    }

    /// Resolve a shorthand prefix to the field name it targets.
    ///
    /// Returns `None` when the prefix is not a known alias.
    pub fn resolve<'a>(&'a self, prefix: &'a str) -> Option<&'a str> {
        let field = self.aliases.get(prefix)?;
        if field.is_empty() {
            Some(prefix)
        } else {
            Some(field.as_str())
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Parse aliases from a TOML table of string pairs.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse field aliases: {}", e)))
    }

    /// Serialize aliases as a TOML table.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize field aliases: {}", e)))
    }

    /// Load aliases from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl From<HashMap<String, String>> for FieldAliases {
    fn from(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldAliases
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
