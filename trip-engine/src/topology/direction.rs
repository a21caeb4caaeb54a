//! Direction resolution on the cyclic line.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{ConfigError, EngineError, Locale, Station, StationId};

use super::alias::AliasIndex;
use super::line::Line;

/// A rotational direction around the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// The answer to "which platform direction do I take?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    /// Name of the line the journey uses.
    pub line: String,

    /// Winning rotation around the cycle.
    pub rotation: Rotation,

    /// Signage id to follow: the configured terminal for the winning
    /// rotation, or the station itself in the degenerate `from == to` case.
    pub toward: StationId,

    /// Resolved origin station.
    pub from: StationId,

    /// Resolved destination station.
    pub to: StationId,

    /// Number of stops in the winning rotation (0 for the degenerate case).
    pub stops: usize,
}

/// The station topology: one cyclic line plus its alias index.
///
/// Built once at engine initialization from the static station table;
/// alias conflicts and malformed lines fail the build eagerly.
#[derive(Debug, Clone)]
pub struct Topology {
    line: Line,
    aliases: AliasIndex,
    stations: HashMap<StationId, Station>,
}

impl Topology {
    /// Build the topology from the station table and line definition.
    ///
    /// Every station id, display name and alias string is registered in
    /// the alias index; a normalized alias claimed by two different
    /// stations aborts with `ConfigError::DuplicateAlias`.
    pub fn new(stations: Vec<Station>, line: Line) -> Result<Self, ConfigError> {
        let mut aliases = AliasIndex::new();
        let mut by_id = HashMap::new();

        for station in stations {
            aliases.insert(station.id.as_str(), &station.id)?;
            for name in station.names.values() {
                aliases.insert(name, &station.id)?;
            }
            for alias in &station.aliases {
                aliases.insert(alias, &station.id)?;
            }
            by_id.insert(station.id.clone(), station);
        }

        Ok(Self {
            line,
            aliases,
            stations: by_id,
        })
    }

    /// The line this topology models.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Resolve a raw user string to a canonical station id.
    pub fn resolve_station(&self, input: &str) -> Result<&StationId, EngineError> {
        self.aliases
            .resolve(input)
            .ok_or_else(|| EngineError::UnknownStation(input.to_string()))
    }

    /// Display name for a station id in a locale; degrades to the id.
    pub fn station_name<'a>(&'a self, id: &'a StationId, locale: Locale) -> &'a str {
        self.stations
            .get(id)
            .map(|s| s.name(locale))
            .unwrap_or_else(|| id.as_str())
    }

    /// Resolve the boarding direction from one station to another.
    ///
    /// Both inputs pass through alias normalization. With N the cycle
    /// length, the clockwise and counter-clockwise hop counts are computed
    /// modulo N and the strictly smaller one wins. On an exact tie the
    /// clockwise terminal is always chosen, independent of argument order.
    /// `resolve_direction(a, a)` is the degenerate self-case: `toward` is
    /// the station itself and `stops` is zero.
    pub fn resolve_direction(&self, from: &str, to: &str) -> Result<Direction, EngineError> {
        let from = self.resolve_station(from)?.clone();
        let to = self.resolve_station(to)?.clone();

        if from == to {
            return Ok(Direction {
                line: self.line.name().to_string(),
                rotation: Rotation::Clockwise,
                toward: from.clone(),
                from: from.clone(),
                to,
                stops: 0,
            });
        }

        // Stations may be known by alias but absent from this line.
        let i_from = self
            .line
            .index_of(&from)
            .ok_or_else(|| EngineError::UnknownStation(from.to_string()))?;
        let i_to = self
            .line
            .index_of(&to)
            .ok_or_else(|| EngineError::UnknownStation(to.to_string()))?;

        let n = self.line.len();
        let cw = (i_to + n - i_from) % n;
        let ccw = (i_from + n - i_to) % n;

        debug!(%from, %to, cw, ccw, "resolved rotational distances");

        // Tie-break: the clockwise terminal, the rotation the cycle is
        // declared in. Fixed and order-independent.
        let (rotation, stops) = if ccw < cw {
            (Rotation::CounterClockwise, ccw)
        } else {
            (Rotation::Clockwise, cw)
        };

        let toward = match rotation {
            Rotation::Clockwise => self.line.clockwise_terminal().clone(),
            Rotation::CounterClockwise => self.line.counter_clockwise_terminal().clone(),
        };

        Ok(Direction {
            line: self.line.name().to_string(),
            rotation,
            toward,
            from,
            to,
            stops,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    /// Ten stations a..j on a cycle, terminals a (clockwise) and f.
    fn topology() -> Topology {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let stations: Vec<Station> = names
            .iter()
            .map(|s| Station::new(sid(s), s.to_uppercase()))
            .collect();
        let line = Line::new(
            "test-loop",
            names.iter().map(|s| sid(s)).collect(),
            sid("a"),
            sid("f"),
        )
        .unwrap();
        Topology::new(stations, line).unwrap()
    }

    #[test]
    fn worked_example_j_to_c() {
        // cw = (2 - 9 + 10) % 10 = 3, ccw = (9 - 2 + 10) % 10 = 7.
        let dir = topology().resolve_direction("j", "c").unwrap();

        assert_eq!(dir.rotation, Rotation::Clockwise);
        assert_eq!(dir.toward, sid("a"));
        assert_eq!(dir.stops, 3);
    }

    #[test]
    fn reverse_pair_names_opposite_terminal() {
        let topo = topology();
        let there = topo.resolve_direction("j", "c").unwrap();
        let back = topo.resolve_direction("c", "j").unwrap();

        assert_eq!(there.toward, sid("a"));
        assert_eq!(back.toward, sid("f"));
        assert_eq!(back.stops, 3);
    }

    #[test]
    fn self_case_is_idempotent() {
        let dir = topology().resolve_direction("d", "d").unwrap();
        assert_eq!(dir.toward, sid("d"));
        assert_eq!(dir.stops, 0);
    }

    #[test]
    fn tie_uses_clockwise_terminal_both_ways() {
        // a and f are 5 apart on a 10-cycle: cw == ccw == 5.
        let topo = topology();
        let forward = topo.resolve_direction("a", "f").unwrap();
        let backward = topo.resolve_direction("f", "a").unwrap();

        assert_eq!(forward.rotation, Rotation::Clockwise);
        assert_eq!(backward.rotation, Rotation::Clockwise);
        assert_eq!(forward.toward, sid("a"));
        assert_eq!(backward.toward, sid("a"));
    }

    #[test]
    fn unknown_station() {
        let err = topology().resolve_direction("narnia", "c").unwrap_err();
        assert!(matches!(err, EngineError::UnknownStation(s) if s == "narnia"));
    }

    #[test]
    fn resolves_through_aliases() {
        let names = ["shinjuku", "shibuya", "ebisu"];
        let stations = vec![
            Station::new(sid("shinjuku"), "Shinjuku")
                .with_name(Locale::Ja, "新宿")
                .with_alias("Shinjuku Sta."),
            Station::new(sid("shibuya"), "Shibuya").with_name(Locale::Ja, "渋谷"),
            Station::new(sid("ebisu"), "Ebisu"),
        ];
        let line = Line::new(
            "mini-loop",
            names.iter().map(|s| sid(s)).collect(),
            sid("shinjuku"),
            sid("shibuya"),
        )
        .unwrap();
        let topo = Topology::new(stations, line).unwrap();

        let dir = topo.resolve_direction("  Shinjuku Sta. ", "渋谷").unwrap();
        assert_eq!(dir.from, sid("shinjuku"));
        assert_eq!(dir.to, sid("shibuya"));
    }

    #[test]
    fn station_name_lookup_degrades_to_id() {
        let topo = topology();
        assert_eq!(topo.station_name(&sid("a"), Locale::En), "A");
        assert_eq!(topo.station_name(&sid("zz"), Locale::En), "zz");
    }

    #[test]
    fn conflicting_alias_fails_build() {
        let stations = vec![
            Station::new(sid("shinjuku"), "Shinjuku"),
            Station::new(sid("shibuya"), "Shibuya").with_alias("SHINJUKU"),
        ];
        let line = Line::new(
            "mini-loop",
            vec![sid("shinjuku"), sid("shibuya")],
            sid("shinjuku"),
            sid("shibuya"),
        )
        .unwrap();

        let err = Topology::new(stations, line).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAlias { .. }));
    }
}
