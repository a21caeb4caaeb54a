//! Station topology: alias resolution and direction finding on a cyclic line.
//!
//! This module answers: "I'm at this station, which platform direction
//! takes me to that station fastest?" The line is a single cycle; the two
//! rotational directions map to two configured terminal stations (signage
//! names), which are data, never derived from the cycle.

mod alias;
mod direction;
mod line;

pub use alias::{AliasIndex, normalize};
pub use direction::{Direction, Rotation, Topology};
pub use line::Line;
