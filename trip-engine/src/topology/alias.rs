//! Alias normalization and the alias → station index.

use std::collections::HashMap;

use crate::domain::{ConfigError, StationId};

/// Normalize a station name or alias into its lookup key.
///
/// The normalization is a pure function: case fold, strip common Latin
/// diacritics (so "Ōsaki" and "osaki" collide), and drop all whitespace
/// and punctuation. Identical input always yields the same key.
///
/// # Examples
///
/// ```
/// use trip_engine::topology::normalize;
///
/// assert_eq!(normalize("Shin-Ōkubo"), "shinokubo");
/// assert_eq!(normalize("  Shinjuku Sta. "), "shinjukusta");
/// assert_eq!(normalize("恵比寿"), "恵比寿");
/// ```
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_whitespace() || c.is_ascii_punctuation() || is_cjk_punctuation(c) {
            continue;
        }
        match fold_diacritic(c) {
            Some(folded) => out.push(folded),
            None => out.extend(c.to_lowercase()),
        }
    }

    out
}

/// CJK punctuation that signage and user input commonly carry.
fn is_cjk_punctuation(c: char) -> bool {
    matches!(c, '、' | '。' | '・' | '「' | '」' | '（' | '）' | '〜' | '：')
}

/// Fold a Latin character with a diacritic to its base letter, lowercased.
///
/// Covers the vowel macrons used in romanized Japanese plus the common
/// Western European accents. Characters outside the table pass through.
fn fold_diacritic(c: char) -> Option<char> {
    let folded = match c {
        'ā' | 'Ā' | 'á' | 'Á' | 'à' | 'À' | 'â' | 'Â' | 'ä' | 'Ä' | 'ã' | 'Ã' => 'a',
        'ē' | 'Ē' | 'é' | 'É' | 'è' | 'È' | 'ê' | 'Ê' | 'ë' | 'Ë' => 'e',
        'ī' | 'Ī' | 'í' | 'Í' | 'ì' | 'Ì' | 'î' | 'Î' | 'ï' | 'Ï' => 'i',
        'ō' | 'Ō' | 'ó' | 'Ó' | 'ò' | 'Ò' | 'ô' | 'Ô' | 'ö' | 'Ö' | 'õ' | 'Õ' => 'o',
        'ū' | 'Ū' | 'ú' | 'Ú' | 'ù' | 'Ù' | 'û' | 'Û' | 'ü' | 'Ü' => 'u',
        'ñ' | 'Ñ' => 'n',
        'ç' | 'Ç' => 'c',
        _ => return None,
    };
    Some(folded)
}

/// Index from normalized alias to canonical station id.
///
/// Registration is eager about conflicts: one normalized key claimed by
/// two different stations is a `ConfigError` at build time. Registering
/// the same key again for the same station is an idempotent no-op, since
/// a station's id, display names and aliases often normalize identically.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    map: HashMap<String, StationId>,
}

impl AliasIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias for a station.
    pub fn insert(&mut self, alias: &str, station: &StationId) -> Result<(), ConfigError> {
        let key = normalize(alias);
        if key.is_empty() {
            // Nothing left after normalization; unresolvable anyway.
            return Ok(());
        }

        match self.map.get(&key) {
            Some(existing) if existing == station => Ok(()),
            Some(existing) => Err(ConfigError::DuplicateAlias {
                alias: key,
                first: existing.clone(),
                second: station.clone(),
            }),
            None => {
                self.map.insert(key, station.clone());
                Ok(())
            }
        }
    }

    /// Resolve a raw input string to a station id.
    pub fn resolve(&self, input: &str) -> Option<&StationId> {
        self.map.get(&normalize(input))
    }

    /// Number of registered normalized aliases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no alias is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalization is a pure function: same input, same key.
        #[test]
        fn deterministic(s in ".{0,40}") {
            prop_assert_eq!(normalize(&s), normalize(&s));
        }

        /// Normalization is idempotent: normalizing a key changes nothing.
        #[test]
        fn idempotent(s in ".{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Normalized output never contains whitespace or ASCII punctuation.
        #[test]
        fn no_noise_chars(s in ".{0,40}") {
            let key = normalize(&s);
            prop_assert!(!key.chars().any(|c| c.is_whitespace() || c.is_ascii_punctuation()));
        }

        /// Case never matters.
        #[test]
        fn case_insensitive(s in "[a-zA-Z ]{0,30}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
