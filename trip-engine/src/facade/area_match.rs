//! Area matching and comparison over the fixed question bank.

use serde::{Deserialize, Serialize};

use crate::domain::{AnswerSet, AreaId, EngineError};
use crate::scorer::{self, Comparison, QuestionBank, RankConfig, Ranking};

/// The fixed attribute vector the comparator runs over, plus the two
/// attributes whose sums decide the aggregate "calmer, simpler base"
/// verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareSpec {
    pub attributes: Vec<String>,
    pub base_attributes: [String; 2],
}

impl Default for CompareSpec {
    fn default() -> Self {
        Self {
            attributes: ["nightlife", "calm", "first-time", "airport"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            base_attributes: ["calm".to_string(), "airport".to_string()],
        }
    }
}

/// Wraps the scorer with the fixed question bank and candidate areas.
#[derive(Debug, Clone)]
pub struct AreaMatcher {
    bank: QuestionBank,
    rank_config: RankConfig,
    compare_spec: CompareSpec,
}

impl AreaMatcher {
    pub fn new(bank: QuestionBank, rank_config: RankConfig, compare_spec: CompareSpec) -> Self {
        Self {
            bank,
            rank_config,
            compare_spec,
        }
    }

    /// The question bank, for rendering the questionnaire.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Rank the candidate areas for a (possibly partial) answer set.
    pub fn match_areas(&self, answers: &AnswerSet) -> Ranking {
        scorer::accumulate(answers, &self.bank, &self.rank_config)
    }

    /// Compare two areas over the fixed attribute vector.
    pub fn compare(&self, a: &AreaId, b: &AreaId) -> Result<Comparison, EngineError> {
        scorer::compare(
            &self.bank,
            a,
            b,
            &self.compare_spec.attributes,
            &self.compare_spec.base_attributes,
        )
    }
}
