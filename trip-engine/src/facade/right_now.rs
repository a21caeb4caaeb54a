//! The "what should I do right now" helper.
//!
//! A total lookup over nested rule tables: for any (location, situation,
//! time-of-day) triple it returns a usable advice card, degrading tier by
//! tier down to a hardcoded last resort rather than ever failing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One advice payload: a headline, a thing to do, a thing to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceCard {
    pub title: String,
    pub do_this: String,
    pub avoid: String,
}

impl AdviceCard {
    pub fn new(
        title: impl Into<String>,
        do_this: impl Into<String>,
        avoid: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            do_this: do_this.into(),
            avoid: avoid.into(),
        }
    }
}

/// Which fallback tier produced the advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceTier {
    /// Exact (location, situation, time-of-day) row.
    Exact,
    /// (location, situation) any-time default.
    SituationDefault,
    /// Location-level generic.
    LocationGeneric,
    /// Global generic.
    GlobalGeneric,
    /// Hardcoded last resort.
    LastResort,
}

/// Nested rule rows for the right-now helper, keyed by categorical tuples.
#[derive(Debug, Clone, Default)]
pub struct RightNowTable {
    exact: HashMap<(String, String, String), AdviceCard>,
    by_situation: HashMap<(String, String), AdviceCard>,
    by_location: HashMap<String, AdviceCard>,
    global: Option<AdviceCard>,
}

impl RightNowTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row for an exact (location, situation, time-of-day) triple.
    pub fn exact(
        mut self,
        location: &str,
        situation: &str,
        time_of_day: &str,
        card: AdviceCard,
    ) -> Self {
        self.exact.insert(
            (location.into(), situation.into(), time_of_day.into()),
            card,
        );
        self
    }

    /// Any-time default for a (location, situation) pair.
    pub fn situation_default(mut self, location: &str, situation: &str, card: AdviceCard) -> Self {
        self.by_situation
            .insert((location.into(), situation.into()), card);
        self
    }

    /// Location-level generic row.
    pub fn location_generic(mut self, location: &str, card: AdviceCard) -> Self {
        self.by_location.insert(location.into(), card);
        self
    }

    /// Global generic row.
    pub fn global_generic(mut self, card: AdviceCard) -> Self {
        self.global = Some(card);
        self
    }
}

/// The helper itself: table plus the hardcoded last resort.
#[derive(Debug, Clone)]
pub struct RightNowHelper {
    table: RightNowTable,
}

impl RightNowHelper {
    pub fn new(table: RightNowTable) -> Self {
        Self { table }
    }

    /// Advice for a (location, situation, time-of-day) triple.
    ///
    /// Four-tier chain, short-circuiting at the first hit: exact row →
    /// situation default → location generic → global generic → hardcoded
    /// last resort. Total: every input combination yields a card.
    pub fn advise(&self, location: &str, situation: &str, time_of_day: &str) -> (AdviceCard, AdviceTier) {
        let t = &self.table;

        if let Some(card) = t.exact.get(&(
            location.to_string(),
            situation.to_string(),
            time_of_day.to_string(),
        )) {
            return (card.clone(), AdviceTier::Exact);
        }

        if let Some(card) = t
            .by_situation
            .get(&(location.to_string(), situation.to_string()))
        {
            debug!(location, situation, "right-now fell back to situation default");
            return (card.clone(), AdviceTier::SituationDefault);
        }

        if let Some(card) = t.by_location.get(location) {
            debug!(location, "right-now fell back to location generic");
            return (card.clone(), AdviceTier::LocationGeneric);
        }

        if let Some(card) = &t.global {
            debug!("right-now fell back to global generic");
            return (card.clone(), AdviceTier::GlobalGeneric);
        }

        (last_resort(), AdviceTier::LastResort)
    }
}

/// The hardcoded last-resort card. Never localized, never configurable;
/// it exists so the helper stays total even over an empty table.
fn last_resort() -> AdviceCard {
    AdviceCard::new(
        "Take a breath",
        "Find a nearby cafe, sit down, and look at a map for ten minutes.",
        "Don't rush into a long train ride without a plan.",
    )
}
