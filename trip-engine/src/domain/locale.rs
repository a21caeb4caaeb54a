//! Locales and display-text lookup.
//!
//! The engines never branch on locale; they produce stable keys and the
//! presentation layer resolves them to display strings via the
//! `TextTable`. This keeps scoring and rule tables locale-independent.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Japanese.
    Ja,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Ja => f.write_str("ja"),
        }
    }
}

/// Display-string lookup keyed by `(stable key, locale)`.
///
/// Missing `(key, locale)` pairs fall back to the English entry for the
/// same key; a key with no entry at all resolves to `None` and callers
/// degrade to showing the key itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextTable {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl TextTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a display string for `(key, locale)`.
    pub fn insert(&mut self, key: impl Into<String>, locale: Locale, text: impl Into<String>) {
        self.entries
            .entry(locale)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, locale: Locale, text: impl Into<String>) -> Self {
        self.insert(key, locale, text);
        self
    }

    /// Resolve a key for a locale, falling back to English.
    pub fn resolve(&self, key: &str, locale: Locale) -> Option<&str> {
        self.entries
            .get(&locale)
            .and_then(|m| m.get(key))
            .or_else(|| self.entries.get(&Locale::En).and_then(|m| m.get(key)))
            .map(String::as_str)
    }

    /// Resolve a key, degrading to the key itself when no entry exists.
    pub fn resolve_or_key<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.resolve(key, locale).unwrap_or(key)
    }

    /// Number of `(key, locale)` entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}
