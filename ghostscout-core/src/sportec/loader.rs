//! Sportec event-data loader and the schema prober built on top of it.
//!
//! The loader reads the two locally placed XML files and produces an
//! `EventDataset`. Parse faults are fatal and propagate to the caller. The
//! prober adds the fail-fast precondition: if either input file is missing,
//! that is a checked condition, not an error — it reports the missing
//! directory and no load is attempted.

use super::model::{DatasetMetadata, Event, EventDataset, Orientation, Point, Provider};
use super::parse::{self, CoordinateSystem};
use crate::config::{DataLayout, PitchDimensions, SportecFiles};
use crate::data::provider::DataError;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a load: output coordinate frame and pitch geometry.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub coordinates: CoordinateSystem,
    pub pitch: PitchDimensions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            coordinates: CoordinateSystem::Metric,
            pitch: PitchDimensions::default(),
        }
    }
}

/// Load a Sportec event dataset from local files.
pub fn load_event_data(
    events_path: &Path,
    meta_path: &Path,
    options: &LoadOptions,
) -> Result<EventDataset, DataError> {
    let meta_xml = fs::read_to_string(meta_path)?;
    let events_xml = fs::read_to_string(events_path)?;

    let info = parse::parse_match_information(&meta_xml)?;
    let events = parse::parse_events(&events_xml, options.pitch, options.coordinates, &info.players)?;

    Ok(EventDataset {
        metadata: DatasetMetadata {
            provider: Provider::Sportec,
            orientation: Orientation::ActionExecutingTeam,
            match_id: info.match_id,
            teams: info.teams,
            pitch: options.pitch,
        },
        events,
    })
}

/// First-event sample in a probe report.
#[derive(Debug, Clone)]
pub struct FirstEventReport {
    pub event_name: String,
    pub player: Option<String>,
    pub coordinates: Option<Point>,
    pub timestamp: chrono::Duration,
}

/// The five diagnostic values the prober prints.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub provider: String,
    pub orientation: String,
    pub event_count: usize,
    pub first_event: FirstEventReport,
}

/// Result of a probe run.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// Precondition failed: at least one input file is absent. The loader
    /// was never called; the process should exit normally.
    MissingInputs { raw_dir: PathBuf },
    /// Dataset loaded; report carries the inspection values.
    Loaded(ProbeReport),
}

/// Check preconditions, load the local Sportec dataset, and summarize it.
///
/// Loader faults (unreadable or malformed XML with both files present)
/// propagate unchanged.
pub fn probe_dataset(
    layout: &DataLayout,
    files: &SportecFiles,
    options: &LoadOptions,
) -> Result<ProbeOutcome, DataError> {
    let raw_dir = layout.raw_dir();
    let events_path = files.events_path(&raw_dir);
    let meta_path = files.meta_data_path(&raw_dir);

    if !events_path.exists() || !meta_path.exists() {
        return Ok(ProbeOutcome::MissingInputs { raw_dir });
    }

    let dataset = load_event_data(&events_path, &meta_path, options)?;
    Ok(ProbeOutcome::Loaded(summarize(&dataset)))
}

fn summarize(dataset: &EventDataset) -> ProbeReport {
    // parse_events rejects empty datasets, so events[0] is always there
    let first: &Event = &dataset.events[0];
    ProbeReport {
        provider: dataset.metadata.provider.to_string(),
        orientation: dataset.metadata.orientation.to_string(),
        event_count: dataset.events.len(),
        first_event: FirstEventReport {
            event_name: first.event_name.clone(),
            player: first.player.as_ref().map(|p| p.to_string()),
            coordinates: first.coordinates,
            timestamp: first.timestamp,
        },
    }
}
