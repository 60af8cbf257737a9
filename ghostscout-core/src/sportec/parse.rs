//! Pull-parsers for the two Sportec XML inputs.
//!
//! Metadata file (DFL match-information shape):
//! `PutDataRequest/MatchInformation` with a `General` element carrying the
//! match id and `Teams/Team/Players/Player` carrying the roster.
//!
//! Events file: root `Events` with `Event` children. Position and time live
//! in the `Event` attributes (`X-Position`, `Y-Position`, `EventTime`); the
//! single child element's tag names the event type and its attributes carry
//! the acting `Player` and `Team`.

use super::model::{Event, Player, Point, Team};
use crate::config::PitchDimensions;
use crate::data::provider::DataError;
use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;
use std::collections::HashMap;

/// Output coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Metres with the origin at the pitch corner (x in [0, length],
    /// y in [0, width]).
    Metric,
    /// Sportec's native pitch-centered metres, passed through untouched.
    ProviderNative,
}

/// Parsed match metadata: match id, teams, and a player lookup table.
#[derive(Debug, Default)]
pub struct MatchInformation {
    pub match_id: Option<String>,
    pub teams: Vec<Team>,
    pub players: HashMap<String, Player>,
}

fn xml_err(file: &str, detail: impl ToString) -> DataError {
    DataError::XmlParse {
        file: file.to_string(),
        detail: detail.to_string(),
    }
}

/// Pull one attribute by name, as an owned string.
fn attr(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element.attributes().flatten().find_map(|a| {
        if a.key.local_name().as_ref() == name.as_bytes() {
            Some(String::from_utf8_lossy(&a.value).into_owned())
        } else {
            None
        }
    })
}

/// Parse the match-information XML into teams and a player lookup.
pub fn parse_match_information(xml: &str) -> Result<MatchInformation, DataError> {
    const FILE: &str = "metadata";

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut info = MatchInformation::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(XmlEvent::Start(e)) | Ok(XmlEvent::Empty(e)) => {
                match e.local_name().as_ref() {
                    b"General" => {
                        info.match_id = attr(&e, "MatchId");
                    }
                    b"Team" => {
                        let team_id = attr(&e, "TeamId")
                            .ok_or_else(|| xml_err(FILE, "Team element without TeamId"))?;
                        info.teams.push(Team {
                            team_id,
                            name: attr(&e, "TeamName").unwrap_or_default(),
                            role: attr(&e, "Role").unwrap_or_default(),
                        });
                    }
                    b"Player" => {
                        let person_id = attr(&e, "PersonId")
                            .ok_or_else(|| xml_err(FILE, "Player element without PersonId"))?;
                        let first = attr(&e, "FirstName").unwrap_or_default();
                        let last = attr(&e, "LastName").unwrap_or_default();
                        let name = format!("{first} {last}").trim().to_string();
                        let shirt_number =
                            attr(&e, "ShirtNumber").and_then(|s| s.parse::<u32>().ok());
                        info.players.insert(
                            person_id.clone(),
                            Player {
                                player_id: person_id,
                                name,
                                shirt_number,
                            },
                        );
                    }
                    _ => {}
                }
            }
            Ok(XmlEvent::Eof) => break,
            Err(e) => return Err(xml_err(FILE, e)),
            _ => {}
        }
        buf.clear();
    }

    if info.teams.is_empty() {
        return Err(xml_err(FILE, "no Team elements found"));
    }

    Ok(info)
}

/// Event as it appears on the wire, before timestamp/coordinate shaping.
struct RawEvent {
    event_id: String,
    event_time: DateTime<FixedOffset>,
    x: Option<f64>,
    y: Option<f64>,
    event_name: Option<String>,
    player_id: Option<String>,
    team_id: Option<String>,
}

/// Map a Sportec child-element tag to a provider-agnostic event name.
///
/// Unknown tags fall through as their lowercased original so nothing is
/// silently dropped.
fn event_name_from_tag(tag: &str) -> String {
    match tag {
        "Pass" | "Cross" => "pass".into(),
        "ShotAtGoal" | "SavedShot" | "BlockedShot" | "ShotWide" | "SuccessfulShot"
        | "OtherShot" | "OwnGoal" => "shot".into(),
        "KickOff" => "kick_off".into(),
        "TacklingGame" => "duel".into(),
        "BallClaiming" => "recovery".into(),
        "Substitution" => "substitution".into(),
        "Caution" => "card".into(),
        "Foul" => "foul_committed".into(),
        "Offside" => "offside".into(),
        "FinalWhistle" => "period_end".into(),
        other => other.to_lowercase(),
    }
}

/// Parse the events XML into domain events.
///
/// Timestamps come out relative to the first event's wall-clock time.
/// Coordinates are re-origined to the pitch corner under `Metric`, or left
/// pitch-centered under `ProviderNative`.
pub fn parse_events(
    xml: &str,
    pitch: PitchDimensions,
    coordinates: CoordinateSystem,
    players: &HashMap<String, Player>,
) -> Result<Vec<Event>, DataError> {
    const FILE: &str = "events";

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut raw_events: Vec<RawEvent> = Vec::new();
    let mut current: Option<RawEvent> = None;

    fn event_attrs(e: &BytesStart<'_>, file: &str) -> Result<RawEvent, DataError> {
        let event_id =
            attr(e, "EventId").ok_or_else(|| xml_err(file, "Event element without EventId"))?;
        let time_str =
            attr(e, "EventTime").ok_or_else(|| xml_err(file, "Event element without EventTime"))?;
        let event_time = DateTime::parse_from_rfc3339(&time_str)
            .map_err(|err| xml_err(file, format!("bad EventTime '{time_str}': {err}")))?;
        Ok(RawEvent {
            event_id,
            event_time,
            x: attr(e, "X-Position").and_then(|v| v.parse().ok()),
            y: attr(e, "Y-Position").and_then(|v| v.parse().ok()),
            event_name: None,
            player_id: None,
            team_id: None,
        })
    }

    // First child element inside an Event names its type and actor
    fn fill_type_child(current: &mut Option<RawEvent>, e: &BytesStart<'_>, tag: &str) {
        if let Some(raw) = current.as_mut() {
            if raw.event_name.is_none() {
                raw.event_name = Some(event_name_from_tag(tag));
                raw.player_id = attr(e, "Player");
                raw.team_id = attr(e, "Team");
            }
        }
    }

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(XmlEvent::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "Event" {
                    current = Some(event_attrs(&e, FILE)?);
                } else if name != "Events" {
                    fill_type_child(&mut current, &e, &name);
                }
            }
            Ok(XmlEvent::Empty(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "Event" {
                    // Self-closing Event carries no type child
                    raw_events.push(event_attrs(&e, FILE)?);
                } else {
                    fill_type_child(&mut current, &e, &name);
                }
            }
            Ok(XmlEvent::End(e)) => {
                if e.local_name().as_ref() == b"Event" {
                    if let Some(raw) = current.take() {
                        raw_events.push(raw);
                    }
                }
            }
            Ok(XmlEvent::Eof) => break,
            Err(e) => return Err(xml_err(FILE, e)),
            _ => {}
        }
        buf.clear();
    }

    if raw_events.is_empty() {
        return Err(DataError::EmptyDataset("no Event elements found".into()));
    }

    let t0 = raw_events[0].event_time;

    let events = raw_events
        .into_iter()
        .map(|raw| {
            let coordinates = match (raw.x, raw.y) {
                (Some(x), Some(y)) => Some(match coordinates {
                    CoordinateSystem::Metric => Point {
                        x: x + pitch.length / 2.0,
                        y: y + pitch.width / 2.0,
                    },
                    CoordinateSystem::ProviderNative => Point { x, y },
                }),
                _ => None,
            };

            let player = raw.player_id.map(|id| {
                players.get(&id).cloned().unwrap_or(Player {
                    player_id: id.clone(),
                    name: String::new(),
                    shirt_number: None,
                })
            });

            Event {
                event_id: raw.event_id,
                event_name: raw.event_name.unwrap_or_else(|| "generic".into()),
                team_id: raw.team_id,
                player,
                coordinates,
                timestamp: raw.event_time - t0,
            }
        })
        .collect();

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<PutDataRequest>
  <MatchInformation>
    <General MatchId="DFL-MAT-003BN1" Competition="Test"/>
    <Teams>
      <Team TeamId="DFL-CLU-000017" TeamName="Home FC" Role="home">
        <Players>
          <Player PersonId="DFL-OBJ-002G3K" FirstName="Ada" LastName="Keeper" ShirtNumber="1"/>
          <Player PersonId="DFL-OBJ-002FZ1" FirstName="Bo" LastName="Striker" ShirtNumber="9"/>
        </Players>
      </Team>
      <Team TeamId="DFL-CLU-000018" TeamName="Away United" Role="away">
        <Players>
          <Player PersonId="DFL-OBJ-002H77" FirstName="Cy" LastName="Winger" ShirtNumber="7"/>
        </Players>
      </Team>
    </Teams>
  </MatchInformation>
</PutDataRequest>"#;

    const EVENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Events>
  <Event EventId="1" EventTime="2022-11-11T18:30:00.000+01:00" X-Position="0.0" Y-Position="0.0">
    <KickOff Player="DFL-OBJ-002FZ1" Team="DFL-CLU-000017"/>
  </Event>
  <Event EventId="2" EventTime="2022-11-11T18:30:03.200+01:00" X-Position="-12.30" Y-Position="5.40">
    <Pass Player="DFL-OBJ-002FZ1" Team="DFL-CLU-000017" Evaluation="successfullyCompleted"/>
  </Event>
  <Event EventId="3" EventTime="2022-11-11T18:31:10.000+01:00" X-Position="41.00" Y-Position="-2.00">
    <ShotAtGoal Player="DFL-OBJ-002H77" Team="DFL-CLU-000018"/>
  </Event>
</Events>"#;

    #[test]
    fn metadata_yields_teams_and_player_lookup() {
        let info = parse_match_information(META).unwrap();
        assert_eq!(info.match_id.as_deref(), Some("DFL-MAT-003BN1"));
        assert_eq!(info.teams.len(), 2);
        assert_eq!(info.teams[0].role, "home");
        assert_eq!(info.players.len(), 3);
        let bo = &info.players["DFL-OBJ-002FZ1"];
        assert_eq!(bo.name, "Bo Striker");
        assert_eq!(bo.shirt_number, Some(9));
    }

    #[test]
    fn metadata_without_teams_is_an_error() {
        let xml = "<PutDataRequest><MatchInformation/></PutDataRequest>";
        assert!(parse_match_information(xml).is_err());
    }

    #[test]
    fn events_parse_with_relative_timestamps() {
        let info = parse_match_information(META).unwrap();
        let events = parse_events(
            EVENTS,
            PitchDimensions::default(),
            CoordinateSystem::Metric,
            &info.players,
        )
        .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_name, "kick_off");
        assert_eq!(events[0].timestamp, chrono::Duration::zero());
        assert_eq!(events[1].event_name, "pass");
        assert_eq!(events[1].timestamp, chrono::Duration::milliseconds(3200));
        assert_eq!(events[2].event_name, "shot");
        assert_eq!(events[2].timestamp, chrono::Duration::seconds(70));
    }

    #[test]
    fn metric_coordinates_are_reorigined_to_the_corner() {
        let info = parse_match_information(META).unwrap();
        let events = parse_events(
            EVENTS,
            PitchDimensions::default(),
            CoordinateSystem::Metric,
            &info.players,
        )
        .unwrap();

        // Kick-off at pitch-centre origin lands at (52.5, 34.0)
        let p = events[0].coordinates.unwrap();
        assert!((p.x - 52.5).abs() < 1e-9);
        assert!((p.y - 34.0).abs() < 1e-9);

        let pass = events[1].coordinates.unwrap();
        assert!((pass.x - 40.2).abs() < 1e-9);
        assert!((pass.y - 39.4).abs() < 1e-9);
    }

    #[test]
    fn provider_native_coordinates_pass_through() {
        let info = parse_match_information(META).unwrap();
        let events = parse_events(
            EVENTS,
            PitchDimensions::default(),
            CoordinateSystem::ProviderNative,
            &info.players,
        )
        .unwrap();
        let pass = events[1].coordinates.unwrap();
        assert!((pass.x - -12.30).abs() < 1e-9);
    }

    #[test]
    fn events_resolve_players_from_metadata() {
        let info = parse_match_information(META).unwrap();
        let events = parse_events(
            EVENTS,
            PitchDimensions::default(),
            CoordinateSystem::Metric,
            &info.players,
        )
        .unwrap();
        let shooter = events[2].player.as_ref().unwrap();
        assert_eq!(shooter.name, "Cy Winger");
        assert_eq!(shooter.shirt_number, Some(7));
    }

    #[test]
    fn garbage_xml_is_an_error() {
        let info = parse_match_information(META).unwrap();
        let result = parse_events(
            "<Events><Event EventId=",
            PitchDimensions::default(),
            CoordinateSystem::Metric,
            &info.players,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_events_element_is_an_error() {
        let info = parse_match_information(META).unwrap();
        let result = parse_events(
            "<Events></Events>",
            PitchDimensions::default(),
            CoordinateSystem::Metric,
            &info.players,
        );
        assert!(matches!(result, Err(DataError::EmptyDataset(_))));
    }
}
