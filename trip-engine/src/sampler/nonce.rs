//! Clock and nonce-storage capabilities for the daily seed.
//!
//! The sampler is a pure function of (tables, date, inputs); the date and
//! the per-date nonce slot are injected as capabilities so tests can pin
//! both. The real clock and file-backed store are wired in only at the
//! top-level composition point.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::hash::fnv1a_32;

/// Source of "today" for daily-seed scoping.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// The real clock.
///
/// Daily seeds are scoped to the UTC date: one global rollover instant,
/// so determinism does not depend on the device timezone of the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// One read/write nonce slot addressable by calendar date.
///
/// The store holds at most the current date's nonce; storing a new date
/// may discard the previous one. A stored nonce is immutable for its
/// date: callers only write when `load` returned `None`.
pub trait NonceStore: Send + Sync {
    /// The nonce previously stored for this date, if any.
    fn load(&self, date: NaiveDate) -> Option<String>;

    /// Persist the nonce for this date.
    fn store(&self, date: NaiveDate, nonce: &str);
}

/// In-memory store: survives across calls within one session.
#[derive(Debug, Default)]
pub struct MemoryNonceStore {
    slot: Mutex<HashMap<String, String>>,
}

impl MemoryNonceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceStore for MemoryNonceStore {
    fn load(&self, date: NaiveDate) -> Option<String> {
        let guard = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.get(&date.to_string()).cloned()
    }

    fn store(&self, date: NaiveDate, nonce: &str) {
        let mut guard = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(date.to_string(), nonce.to_string());
    }
}

/// On-disk slot file contents.
#[derive(Debug, Serialize, Deserialize)]
struct NonceSlot {
    date: String,
    nonce: String,
}

/// File-backed store: a single JSON slot holding the latest date's nonce.
///
/// IO failures degrade rather than fail: an unreadable slot reads as
/// absent (a fresh nonce is minted, breaking determinism only for that
/// date) and a failed write is logged and dropped.
#[derive(Debug, Clone)]
pub struct FileNonceStore {
    path: PathBuf,
}

impl FileNonceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NonceStore for FileNonceStore {
    fn load(&self, date: NaiveDate) -> Option<String> {
        let bytes = std::fs::read(&self.path).ok()?;
        let slot: NonceSlot = serde_json::from_slice(&bytes).ok()?;
        (slot.date == date.to_string()).then_some(slot.nonce)
    }

    fn store(&self, date: NaiveDate, nonce: &str) {
        let slot = NonceSlot {
            date: date.to_string(),
            nonce: nonce.to_string(),
        };
        let json = match serde_json::to_vec(&slot) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize nonce slot");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "could not persist nonce slot");
        }
    }
}

/// Mint a fresh nonce for a date.
///
/// Entropy is system time folded through the engine's hash; it need not
/// be cryptographic, only different from one day's mint to the next.
pub(super) fn mint_nonce(date: NaiveDate) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let ticks = now.as_nanos();

    let low = fnv1a_32(&format!("{date}:{ticks}"));
    let high = fnv1a_32(&format!("{ticks}:{date}"));
    format!("{high:08x}{low:08x}")
}
