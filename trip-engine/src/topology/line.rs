//! A cyclic transit line with configured terminal stations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{ConfigError, StationId};

/// Raw line shape used for deserialization; validated into a [`Line`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSpec {
    pub name: String,
    pub stations: Vec<StationId>,
    pub clockwise_terminal: StationId,
    pub counter_clockwise_terminal: StationId,
}

/// One ordered cyclic sequence of stations.
///
/// The sequence order defines the clockwise rotation. A true cycle has no
/// endpoint; the two terminals are operational signage names baked into
/// configuration, one per rotation, and must themselves be stations on
/// the line. Validated at construction: at least two stations, no
/// duplicates, terminals on the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LineSpec", into = "LineSpec")]
pub struct Line {
    name: String,
    stations: Vec<StationId>,
    clockwise_terminal: StationId,
    counter_clockwise_terminal: StationId,
}

impl Line {
    /// Build a validated line.
    pub fn new(
        name: impl Into<String>,
        stations: Vec<StationId>,
        clockwise_terminal: StationId,
        counter_clockwise_terminal: StationId,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if stations.len() < 2 {
            return Err(ConfigError::LineTooShort { line: name });
        }

        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station) {
                return Err(ConfigError::DuplicateStation {
                    line: name,
                    station: station.clone(),
                });
            }
        }

        for terminal in [&clockwise_terminal, &counter_clockwise_terminal] {
            if !stations.contains(terminal) {
                return Err(ConfigError::TerminalOffLine {
                    line: name,
                    terminal: terminal.clone(),
                });
            }
        }

        Ok(Self {
            name,
            stations,
            clockwise_terminal,
            counter_clockwise_terminal,
        })
    }

    /// The line's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cycle length N.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// A line always has stations; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in clockwise order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Position of a station in the cycle, if it is on this line.
    pub fn index_of(&self, station: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Terminal signage id for the clockwise rotation.
    pub fn clockwise_terminal(&self) -> &StationId {
        &self.clockwise_terminal
    }

    /// Terminal signage id for the counter-clockwise rotation.
    pub fn counter_clockwise_terminal(&self) -> &StationId {
        &self.counter_clockwise_terminal
    }
}

impl TryFrom<LineSpec> for Line {
    type Error = ConfigError;

    fn try_from(spec: LineSpec) -> Result<Self, Self::Error> {
        Line::new(
            spec.name,
            spec.stations,
            spec.clockwise_terminal,
            spec.counter_clockwise_terminal,
        )
    }
}

impl From<Line> for LineSpec {
    fn from(line: Line) -> LineSpec {
        LineSpec {
            name: line.name,
            stations: line.stations,
            clockwise_terminal: line.clockwise_terminal,
            counter_clockwise_terminal: line.counter_clockwise_terminal,
        }
    }
}
