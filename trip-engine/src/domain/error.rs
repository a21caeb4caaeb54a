//! Engine error types.
//!
//! Runtime lookup failures are recoverable and typed; the façade degrades
//! to fallback output rather than surfacing them to the end user.
//! `ConfigError` is the one fatal class: it is raised eagerly while the
//! static tables are loaded and must abort initialization.

use super::{AreaId, StationId};

/// Recoverable errors raised while answering a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Neither canonical id nor any alias matched the input string.
    #[error("unknown station: {0:?} did not match any registered alias")]
    UnknownStation(String),

    /// An area id was used that the tables do not declare.
    #[error("unknown area: {0}")]
    UnknownArea(AreaId),

    /// An area was compared against itself.
    #[error("cannot compare an area with itself")]
    InvalidComparison,
}

/// Fatal table-loading errors.
///
/// Detected eagerly when tables are built, never at query time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One normalized alias maps to two different stations.
    #[error("alias {alias:?} is claimed by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: StationId,
        second: StationId,
    },

    /// A station appears more than once in a line's cycle.
    #[error("line {line:?} lists station {station} more than once")]
    DuplicateStation { line: String, station: StationId },

    /// A cyclic line needs at least two stations.
    #[error("line {line:?} must have at least two stations")]
    LineTooShort { line: String },

    /// A configured terminal is not a station on the line.
    #[error("terminal {terminal} is not a station on line {line:?}")]
    TerminalOffLine { line: String, terminal: StationId },

    /// A question id is declared twice in the question bank.
    #[error("question {0} is declared more than once")]
    DuplicateQuestion(String),

    /// An option id is declared twice within one question.
    #[error("option {option} is declared more than once in question {question}")]
    DuplicateOption { question: String, option: String },

    /// A weight map references an area the bank does not declare.
    #[error("question {question} option {option} weights unknown area {area}")]
    WeightForUnknownArea {
        question: String,
        option: String,
        area: AreaId,
    },

    /// An area id is declared twice in the candidate list.
    #[error("area {0} is declared more than once")]
    DuplicateArea(AreaId),
}
