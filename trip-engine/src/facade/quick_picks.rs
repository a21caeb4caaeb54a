//! Quick picks: deterministic daily query suggestions.
//!
//! For an (area, mood, companion) tuple this selects 2–3 outbound query
//! strings from the configured pools and enriches each with a "why now"
//! phrase. Both selections go through the one shared sampler primitive;
//! there is no parallel pick-and-dedup implementation here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sampler::{Clock, NonceStore, Sampler, fnv1a_32};

/// One suggestion: an outbound query string plus its "why now" phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickPick {
    pub query: String,

    /// Absent only when the phrase pool is empty.
    pub why_now: Option<String>,
}

/// Query-template pools keyed by categorical tuples, plus the phrase pool.
#[derive(Debug, Clone, Default)]
pub struct QuickPickTable {
    by_combo: HashMap<(String, String, String), Vec<String>>,
    by_area: HashMap<String, Vec<String>>,
    global: Vec<String>,
    phrases: Vec<String>,
}

impl QuickPickTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query pool for an exact (area, mood, companion) tuple.
    pub fn combo(mut self, area: &str, mood: &str, companion: &str, queries: &[&str]) -> Self {
        self.by_combo.insert(
            (area.into(), mood.into(), companion.into()),
            queries.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Fallback query pool for an area.
    pub fn area(mut self, area: &str, queries: &[&str]) -> Self {
        self.by_area
            .insert(area.into(), queries.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Global fallback query pool.
    pub fn global(mut self, queries: &[&str]) -> Self {
        self.global = queries.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The "why now" phrase pool.
    pub fn phrases(mut self, phrases: &[&str]) -> Self {
        self.phrases = phrases.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The most specific non-empty query pool for a tuple.
    fn pool_for(&self, area: &str, mood: &str, companion: &str) -> &[String] {
        if let Some(pool) = self
            .by_combo
            .get(&(area.to_string(), mood.to_string(), companion.to_string()))
        {
            if !pool.is_empty() {
                return pool;
            }
        }
        if let Some(pool) = self.by_area.get(area) {
            if !pool.is_empty() {
                return pool;
            }
        }
        &self.global
    }
}

/// The quick-picks tool.
pub struct QuickPicks<C: Clock, S: NonceStore> {
    table: QuickPickTable,
    sampler: Sampler<C, S>,
}

impl<C: Clock, S: NonceStore> QuickPicks<C, S> {
    pub fn new(table: QuickPickTable, sampler: Sampler<C, S>) -> Self {
        Self { table, sampler }
    }

    /// The sampler, shared with any other tool that needs daily picks.
    pub fn sampler(&self) -> &Sampler<C, S> {
        &self.sampler
    }

    /// 2–3 suggestions for an (area, mood, companion) tuple.
    ///
    /// The pick count alternates between 2 and 3 by a fixed hash of the
    /// tuple, so it is stable per tuple across dates. Query selection and
    /// phrase enrichment are both daily-deterministic through the shared
    /// sampler; the phrase seed includes the query string so phrases vary
    /// within one result. An empty query pool yields no picks.
    pub fn picks(&self, area: &str, mood: &str, companion: &str) -> Vec<QuickPick> {
        let pool = self.table.pool_for(area, mood, companion);
        if pool.is_empty() {
            debug!(area, mood, companion, "no query pool for tuple");
            return Vec::new();
        }

        let count = 2 + (fnv1a_32(&format!("{area}|{mood}|{companion}")) % 2) as usize;
        let queries = self.sampler.sample(pool, &[area, mood, companion], count);

        queries
            .into_iter()
            .map(|query| {
                let why_now = self
                    .sampler
                    .sample_one(&self.table.phrases, &[area, mood, companion, query.as_str()]);
                QuickPick { query, why_now }
            })
            .collect()
    }
}
