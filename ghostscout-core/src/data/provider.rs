//! Catalog provider trait and structured error types.
//!
//! The CatalogProvider trait abstracts over the competitions-catalog source
//! (live StatsBomb endpoint vs. canned rows) so tests can run the whole
//! download pipeline without the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the StatsBomb competitions catalog, carried verbatim.
///
/// Rows are filtered but never mutated; the CSV output has the same columns
/// as the source subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionRow {
    pub competition_id: u32,
    pub season_id: u32,
    pub country_name: String,
    pub competition_name: String,
    pub competition_gender: String,
    pub competition_youth: bool,
    pub competition_international: bool,
    pub season_name: String,
    pub match_updated: Option<String>,
    pub match_updated_360: Option<String>,
    /// Null for competitions without 360 tracking coverage.
    pub match_available_360: Option<String>,
    pub match_available: Option<String>,
}

/// Structured error types for acquisition and loading operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("catalog response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("catalog write failed: {0}")]
    CatalogWrite(String),

    #[error("clone of {url} failed: {detail}")]
    CloneFailed { url: String, detail: String },

    #[error("XML parse error in {file}: {detail}")]
    XmlParse { file: String, detail: String },

    #[error("dataset is empty: {0}")]
    EmptyDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for competitions-catalog sources.
pub trait CatalogProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the full competitions catalog, unfiltered.
    fn fetch_competitions(&self) -> Result<Vec<CompetitionRow>, DataError>;
}

/// Trait for repository cloners.
///
/// The mirror step sits above this trait — it decides whether to clone at
/// all (the existence guard) and how a failure is reported.
pub trait GitCloner {
    /// Clone `repo_url` into `target`. The target must not exist yet.
    fn clone_repo(&self, repo_url: &str, target: &std::path::Path) -> Result<(), DataError>;
}

/// Progress callback for the step sequence.
pub trait StepProgress {
    /// Called when a step begins, with its section header.
    fn on_step_start(&self, header: &str);

    /// Called with free-form progress text inside a step.
    fn on_message(&self, message: &str);

    /// Called when a recoverable step failure is swallowed. Console text is
    /// the only signal the failure leaves behind.
    fn on_recoverable_failure(&self, source: &str, err: &DataError);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl StepProgress for StdoutProgress {
    fn on_step_start(&self, header: &str) {
        println!("\n--- {header} ---");
    }

    fn on_message(&self, message: &str) {
        println!("{message}");
    }

    fn on_recoverable_failure(&self, source: &str, err: &DataError) {
        println!("Error while mirroring {source}: {err}");
    }
}

/// Progress reporter that drops everything (tests).
pub struct SilentProgress;

impl StepProgress for SilentProgress {
    fn on_step_start(&self, _header: &str) {}
    fn on_message(&self, _message: &str) {}
    fn on_recoverable_failure(&self, _source: &str, _err: &DataError) {}
}
