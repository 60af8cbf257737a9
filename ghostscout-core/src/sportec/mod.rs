//! Sportec event-data ingestion: XML parsing, domain model, prober.

pub mod loader;
pub mod model;
pub mod parse;

pub use loader::{load_event_data, probe_dataset, LoadOptions, ProbeOutcome, ProbeReport};
pub use model::{DatasetMetadata, Event, EventDataset, Orientation, Player, Point, Provider, Team};
pub use parse::CoordinateSystem;
