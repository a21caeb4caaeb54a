//! Travel-planning decision engine.
//!
//! The deterministic core behind a set of interactive travel helpers:
//! direction finding on a cyclic transit line, multi-criteria area
//! scoring, and reproducible daily-seeded sampling. Every call is a pure
//! function of (static tables, calendar date, user answers).

pub mod dataset;
pub mod domain;
pub mod facade;
pub mod sampler;
pub mod scorer;
pub mod topology;
