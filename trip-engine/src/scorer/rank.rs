//! Weighted accumulation and ranking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{AnswerSet, AreaId};

use super::table::QuestionBank;

/// Configuration for ranking output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Maximum number of ranked areas to return.
    pub max_results: usize,

    /// Maximum number of reason keys per ranked area.
    pub max_reasons: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            max_reasons: 2,
        }
    }
}

/// One ranked area: total score plus the reason keys of the options that
/// contributed the most weight to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedArea {
    pub area: AreaId,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// The ranked top-K result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankedArea>,
}

/// Accumulate answer weights into a ranked top-K.
///
/// For every candidate area, sums the weights contributed by each
/// answered question's selected option (0 when the question is
/// unanswered or the area unspecified). Areas sort by score descending;
/// ties break by declaration order in the bank, never by answer
/// insertion order, so the output is fully reproducible. An empty answer
/// set is not an error: it yields an all-zero ranking in declaration
/// order.
///
/// Reasons per ranked area are the reason keys of options that
/// contributed positive weight, ordered by contributed weight descending
/// (question declaration order on ties), deduplicated, and truncated to
/// `config.max_reasons`.
pub fn accumulate(answers: &AnswerSet, bank: &QuestionBank, config: &RankConfig) -> Ranking {
    // (declaration index, score, contributions as (weight, reason key))
    let mut scored: Vec<(usize, u32, Vec<(u32, &str)>)> = bank
        .areas()
        .iter()
        .enumerate()
        .map(|(idx, area)| {
            let mut score = 0u32;
            let mut contributions: Vec<(u32, &str)> = Vec::new();

            for question in bank.questions() {
                let Some(selected) = answers.get(&question.id) else {
                    continue;
                };
                let Some(option) = question.option(selected) else {
                    continue;
                };
                let weight = option.weight_for(&area.id);
                score += weight;
                if weight > 0 {
                    contributions.push((weight, option.reason.as_str()));
                }
            }

            trace!(area = %area.id, score, "accumulated area score");
            (idx, score, contributions)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let entries = scored
        .into_iter()
        .take(config.max_results)
        .map(|(idx, score, mut contributions)| {
            // Stable sort keeps question declaration order on equal weights.
            contributions.sort_by(|a, b| b.0.cmp(&a.0));

            let mut seen = HashSet::new();
            let reasons: Vec<String> = contributions
                .into_iter()
                .filter(|(_, reason)| seen.insert(*reason))
                .take(config.max_reasons)
                .map(|(_, reason)| reason.to_string())
                .collect();

            RankedArea {
                area: bank.areas()[idx].id.clone(),
                score,
                reasons,
            }
        })
        .collect();

    Ranking { entries }
}
