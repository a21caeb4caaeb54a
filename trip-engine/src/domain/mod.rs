//! Domain types for the decision engine.
//!
//! Core identifier and answer types shared by every engine. All ids are
//! validated at construction time, so code that receives these types can
//! trust their validity.

mod answers;
mod error;
mod locale;
mod station;

pub use answers::{AnswerSet, AreaId, OptionId, QuestionId};
pub use error::{ConfigError, EngineError};
pub use locale::{Locale, TextTable};
pub use station::{InvalidStationId, Station, StationId};
