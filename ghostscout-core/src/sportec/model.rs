//! Provider-agnostic domain model for ingested event data.
//!
//! Mirrors the read-only surface later pipeline stages consume: a dataset
//! with metadata (provider, orientation, teams, pitch) and an ordered event
//! sequence. Nothing here has a lifecycle beyond "loaded, inspected,
//! discarded".

use crate::config::PitchDimensions;
use chrono::Duration;
use std::fmt;

/// Source provider of a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Sportec,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Sportec => write!(f, "sportec"),
        }
    }
}

/// Field orientation of the coordinate frame.
///
/// Sportec event data is expressed relative to the team executing each
/// action, so the only orientation produced here is action-executing-team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    ActionExecutingTeam,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::ActionExecutingTeam => write!(f, "action-executing-team"),
        }
    }
}

/// A point on the pitch, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={:.2}, y={:.2})", self.x, self.y)
    }
}

/// A player referenced by an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub shirt_number: Option<u32>,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.player_id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A team from the match metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    /// "home" or "away" per the metadata file.
    pub role: String,
}

/// One in-match action: type, actor, position, time.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: String,
    pub event_name: String,
    pub team_id: Option<String>,
    pub player: Option<Player>,
    pub coordinates: Option<Point>,
    /// Offset from the first event of the dataset.
    pub timestamp: Duration,
}

/// Dataset-level metadata.
#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    pub provider: Provider,
    pub orientation: Orientation,
    pub match_id: Option<String>,
    pub teams: Vec<Team>,
    pub pitch: PitchDimensions,
}

/// A loaded event dataset: metadata plus the ordered event sequence.
#[derive(Debug, Clone)]
pub struct EventDataset {
    pub metadata: DatasetMetadata,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms_match_console_contract() {
        assert_eq!(Provider::Sportec.to_string(), "sportec");
        assert_eq!(
            Orientation::ActionExecutingTeam.to_string(),
            "action-executing-team"
        );
        assert_eq!(Point { x: 52.5, y: 34.0 }.to_string(), "Point(x=52.50, y=34.00)");
    }

    #[test]
    fn player_display_falls_back_to_id() {
        let anon = Player {
            player_id: "DFL-OBJ-000001".into(),
            name: String::new(),
            shirt_number: None,
        };
        assert_eq!(anon.to_string(), "DFL-OBJ-000001");
    }
}
