//! Language list and search alias table for jobstat.
//!
//! A language label such as `Go` is searched on every provider under each of
//! its aliases (`Go`, `Golang`). Labels without an entry in the table are
//! searched under the label itself.
//!
//! # Example
//!
//! ```
//! use jobstat_languages::LanguageRegistry;
//!
//! let registry = LanguageRegistry::global();
//! assert_eq!(registry.aliases_for("Go"), ["Go", "Golang"]);
//! assert_eq!(registry.aliases_for("Rust"), ["Rust"]);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jobstat/jobstat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use jobstat_types::{JobstatError, Result};
use serde::{Deserialize, Serialize};

/// The language table embedded at compile time.
const LANGUAGES_JSON: &str = include_str!("../data/languages.json");

/// Global language registry instance.
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Default languages and their search aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRegistry {
    /// Languages reported when none are requested explicitly, in report order.
    languages: Vec<String>,
    /// Search terms per language label.
    #[serde(default)]
    aliases: HashMap<String, Vec<String>>,
}

impl LanguageRegistry {
    /// Returns the registry built from the embedded language table.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(|| Self::from_json(LANGUAGES_JSON).expect("Invalid languages.json"))
    }

    /// Parses and validates a language table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the language list is empty,
    /// or an alias list is empty or contains a blank search term.
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Reads a language table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(JobstatError::InvalidAliases(
                "the language list is empty".to_string(),
            ));
        }
        for (language, aliases) in &self.aliases {
            if aliases.is_empty() {
                return Err(JobstatError::InvalidAliases(format!(
                    "{language} has an empty alias list"
                )));
            }
            if aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(JobstatError::InvalidAliases(format!(
                    "{language} has a blank alias"
                )));
            }
        }
        Ok(())
    }

    /// Returns the default languages in report order.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Returns the search terms for a language label.
    ///
    /// Falls back to the label itself when it has no aliases.
    #[must_use]
    pub fn aliases_for<'a>(&'a self, language: &'a str) -> Vec<&'a str> {
        self.aliases.get(language).map_or_else(
            || vec![language],
            |aliases| aliases.iter().map(String::as_str).collect(),
        )
    }

    /// Returns true if the label has an explicit alias list.
    #[must_use]
    pub fn has_aliases(&self, language: &str) -> bool {
        self.aliases.contains_key(language)
    }

    /// Returns the number of default languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns true if there are no default languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_registry_loads() {
        let registry = LanguageRegistry::global();
        assert_eq!(
            registry.languages(),
            ["Python", "Java", "C#", "Go", "JavaScript", "1C"]
        );
    }

    #[test]
    fn test_aliases_in_order() {
        let registry = LanguageRegistry::global();
        assert_eq!(registry.aliases_for("Go"), ["Go", "Golang"]);
        assert!(registry.has_aliases("Go"));
    }

    #[test]
    fn test_fallback_to_label() {
        let registry = LanguageRegistry::global();
        assert_eq!(registry.aliases_for("Python"), ["Python"]);
        assert!(!registry.has_aliases("Python"));
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        let registry = LanguageRegistry::global();
        assert_eq!(registry.aliases_for("go"), ["go"]);
    }

    #[test]
    fn test_missing_alias_section() {
        let registry = LanguageRegistry::from_json(r#"{"languages": ["Rust"]}"#).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.aliases_for("Rust"), ["Rust"]);
    }

    #[test]
    fn test_empty_alias_list_rejected() {
        let result = LanguageRegistry::from_json(r#"{"languages": ["Go"], "aliases": {"Go": []}}"#);
        assert!(matches!(result, Err(JobstatError::InvalidAliases(_))));
    }

    #[test]
    fn test_blank_alias_rejected() {
        let result =
            LanguageRegistry::from_json(r#"{"languages": ["Go"], "aliases": {"Go": ["Go", " "]}}"#);
        assert!(matches!(result, Err(JobstatError::InvalidAliases(_))));
    }

    #[test]
    fn test_empty_language_list_rejected() {
        let result = LanguageRegistry::from_json(r#"{"languages": [], "aliases": {}}"#);
        assert!(matches!(result, Err(JobstatError::InvalidAliases(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = LanguageRegistry::from_json("{");
        assert!(matches!(result, Err(JobstatError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"languages": ["Kotlin"], "aliases": {{"Kotlin": ["Kotlin", "KMP"]}}}}"#
        )
        .unwrap();

        let registry = LanguageRegistry::from_path(file.path()).unwrap();
        assert_eq!(registry.languages(), ["Kotlin"]);
        assert_eq!(registry.aliases_for("Kotlin"), ["Kotlin", "KMP"]);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = LanguageRegistry::from_path(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(JobstatError::Io(_))));
    }
}
