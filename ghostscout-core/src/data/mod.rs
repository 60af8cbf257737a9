//! Data acquisition: catalog fetch, repository mirrors, step orchestration.

pub mod catalog;
pub mod download;
pub mod mirror;
pub mod provider;
pub mod soccernet;
pub mod statsbomb;

pub use download::{run_download, DownloadConfig, DownloadReport, FaultPolicy, StepOutcome};
pub use mirror::SystemGit;
pub use provider::{
    CatalogProvider, CompetitionRow, DataError, GitCloner, SilentProgress, StdoutProgress,
    StepProgress,
};
pub use statsbomb::StatsBombProvider;
