//! The decision façade: one composition root for the three tools.
//!
//! Adapts raw user answers into calls on the topology resolver, the
//! scorer and the sampler. No engine depends on another at runtime; this
//! is the only integration point. Table validation happens eagerly here,
//! so a misconfigured deployment fails at startup, never mid-session.

mod area_match;
mod quick_picks;
mod right_now;

use serde::{Deserialize, Serialize};

use crate::domain::{AnswerSet, AreaId, ConfigError, EngineError, Locale, Station, TextTable};
use crate::sampler::{Clock, NonceStore, Sampler};
use crate::scorer::{Comparison, QuestionBank, RankConfig, Ranking};
use crate::topology::{Direction, Line, Topology};

pub use area_match::{AreaMatcher, CompareSpec};
pub use quick_picks::{QuickPick, QuickPickTable, QuickPicks};
pub use right_now::{AdviceCard, AdviceTier, RightNowHelper, RightNowTable};

/// A direction result enriched with display names for the caller's locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionAdvice {
    #[serde(flatten)]
    pub direction: Direction,

    /// Display name of the terminal (or station, in the self-case) to
    /// follow on signage.
    pub toward_name: String,
}

/// All static tables the engine needs, owned externally.
pub struct EngineTables {
    pub stations: Vec<Station>,
    pub line: Line,
    pub bank: QuestionBank,
    pub rank_config: RankConfig,
    pub compare_spec: CompareSpec,
    pub right_now: RightNowTable,
    pub quick_picks: QuickPickTable,
    pub text: TextTable,
}

/// The engine façade consumed by the interactive tools.
///
/// Pure and synchronous: every result is a function of (tables, date,
/// inputs). The only shared mutable state is the daily nonce slot inside
/// the sampler.
pub struct Engine<C: Clock, S: NonceStore> {
    topology: Topology,
    matcher: AreaMatcher,
    right_now: RightNowHelper,
    quick_picks: QuickPicks<C, S>,
    text: TextTable,
}

impl<C: Clock, S: NonceStore> Engine<C, S> {
    /// Build the engine, validating every table eagerly.
    ///
    /// `ConfigError` here is fatal: the deployment's static configuration
    /// is wrong and initialization must abort loudly.
    pub fn new(tables: EngineTables, clock: C, store: S) -> Result<Self, ConfigError> {
        let topology = Topology::new(tables.stations, tables.line)?;
        let matcher = AreaMatcher::new(tables.bank, tables.rank_config, tables.compare_spec);
        let right_now = RightNowHelper::new(tables.right_now);
        let quick_picks = QuickPicks::new(tables.quick_picks, Sampler::new(clock, store));

        Ok(Self {
            topology,
            matcher,
            right_now,
            quick_picks,
            text: tables.text,
        })
    }

    /// Transit-direction helper: which platform direction to board.
    pub fn direction(
        &self,
        from: &str,
        to: &str,
        locale: Locale,
    ) -> Result<DirectionAdvice, EngineError> {
        let direction = self.topology.resolve_direction(from, to)?;
        let toward_name = self
            .topology
            .station_name(&direction.toward, locale)
            .to_string();

        Ok(DirectionAdvice {
            direction,
            toward_name,
        })
    }

    /// Area matcher: rank candidate areas for an answer set.
    pub fn match_areas(&self, answers: &AnswerSet) -> Ranking {
        self.matcher.match_areas(answers)
    }

    /// Area comparator over the fixed attribute vector.
    pub fn compare_areas(&self, a: &AreaId, b: &AreaId) -> Result<Comparison, EngineError> {
        self.matcher.compare(a, b)
    }

    /// Right-now helper: always returns a usable advice card.
    pub fn right_now(&self, location: &str, situation: &str, time_of_day: &str) -> AdviceCard {
        self.right_now.advise(location, situation, time_of_day).0
    }

    /// Quick picks for an (area, mood, companion) tuple.
    pub fn quick_picks(&self, area: &str, mood: &str, companion: &str) -> Vec<QuickPick> {
        self.quick_picks.picks(area, mood, companion)
    }

    /// The questionnaire, for rendering.
    pub fn question_bank(&self) -> &QuestionBank {
        self.matcher.bank()
    }

    /// Resolve a stable key (reason, terminal, …) to display text.
    pub fn display_text<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.text.resolve_or_key(key, locale)
    }
}
