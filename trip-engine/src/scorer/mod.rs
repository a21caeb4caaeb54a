//! Multi-criteria weighted scoring over candidate areas.
//!
//! Two contracts: `accumulate` turns a partial answer set into a ranked
//! top-K with per-entry reason keys, and `compare` produces per-attribute
//! verdicts between two areas. Both are pure functions of the static
//! tables and the answers; the output never depends on answer insertion
//! order.

mod compare;
mod rank;
mod table;

pub use compare::{AttributeVerdict, Comparison, Verdict, compare};
pub use rank::{RankConfig, RankedArea, Ranking, accumulate};
pub use table::{AreaProfile, OptionRule, Question, QuestionBank};
