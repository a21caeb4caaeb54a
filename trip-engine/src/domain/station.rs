//! Station identifier and record types.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Locale;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A canonical station identifier.
///
/// Station ids are stable, locale-independent keys: non-empty, at most 64
/// characters, lowercase ASCII letters, digits and `-`, starting with a
/// letter. This type guarantees that any `StationId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use trip_engine::domain::StationId;
///
/// let id = StationId::parse("shinjuku").unwrap();
/// assert_eq!(id.as_str(), "shinjuku");
///
/// // Uppercase is rejected
/// assert!(StationId::parse("Shinjuku").is_err());
///
/// // Empty is rejected
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty, at most 64 characters, consist of
    /// lowercase ASCII letters, digits and `-`, and start with a letter.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if bytes.len() > 64 {
            return Err(InvalidStationId {
                reason: "must be at most 64 characters",
            });
        }
        if !bytes[0].is_ascii_lowercase() {
            return Err(InvalidStationId {
                reason: "must start with a lowercase ASCII letter",
            });
        }
        for &b in bytes {
            if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
                return Err(InvalidStationId {
                    reason: "must contain only lowercase ASCII letters, digits and '-'",
                });
            }
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationId::parse(&s)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> String {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station record: canonical id, display names per locale, and the alias
/// strings that resolve to it.
///
/// Display names are presentation data and are looked up by `(id, locale)`;
/// the topology algorithms only ever see the canonical id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Canonical identifier.
    pub id: StationId,

    /// Display names keyed by locale.
    pub names: HashMap<Locale, String>,

    /// Alias strings (signage spellings, romanizations, abbreviations).
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Station {
    /// Create a station with the given id and English display name.
    pub fn new(id: StationId, name_en: impl Into<String>) -> Self {
        let mut names = HashMap::new();
        names.insert(Locale::En, name_en.into());
        Self {
            id,
            names,
            aliases: Vec::new(),
        }
    }

    /// Add a display name for a locale.
    pub fn with_name(mut self, locale: Locale, name: impl Into<String>) -> Self {
        self.names.insert(locale, name.into());
        self
    }

    /// Add an alias string.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Display name for a locale, falling back to English, then to the id.
    pub fn name(&self, locale: Locale) -> &str {
        self.names
            .get(&locale)
            .or_else(|| self.names.get(&Locale::En))
            .map(String::as_str)
            .unwrap_or_else(|| self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("shinjuku").is_ok());
        assert!(StationId::parse("shin-okubo").is_ok());
        assert!(StationId::parse("a1").is_ok());
        assert!(StationId::parse("x").is_ok());
    }

    #[test]
    fn reject_uppercase() {
        assert!(StationId::parse("Shinjuku").is_err());
        assert!(StationId::parse("SHINJUKU").is_err());
    }

    #[test]
    fn reject_empty_and_too_long() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(&"a".repeat(65)).is_err());
        assert!(StationId::parse(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn reject_bad_leading_char() {
        assert!(StationId::parse("-shinjuku").is_err());
        assert!(StationId::parse("1shinjuku").is_err());
    }

    #[test]
    fn reject_bad_chars() {
        assert!(StationId::parse("shin juku").is_err());
        assert!(StationId::parse("shin_juku").is_err());
        assert!(StationId::parse("新宿").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("ebisu").unwrap();
        assert_eq!(format!("{}", id), "ebisu");
        assert_eq!(format!("{:?}", id), "StationId(ebisu)");
    }

    #[test]
    fn station_name_fallback() {
        let station = Station::new(StationId::parse("meguro").unwrap(), "Meguro")
            .with_name(Locale::Ja, "目黒");

        assert_eq!(station.name(Locale::En), "Meguro");
        assert_eq!(station.name(Locale::Ja), "目黒");
    }

    #[test]
    fn station_name_falls_back_to_english() {
        let station = Station::new(StationId::parse("osaki").unwrap(), "Osaki");
        assert_eq!(station.name(Locale::Ja), "Osaki");
    }

    #[test]
    fn serde_roundtrip() {
        let id = StationId::parse("gotanda").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gotanda\"");
        let back: StationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<StationId>("\"Not Valid\"").is_err());
    }
}
