//! Download orchestrator — runs the acquisition steps in fixed sequence.
//!
//! Steps run single-threaded, in order, with no retries. Each step carries
//! one of two fault policies:
//! - `Fatal` — the step's error propagates and aborts the whole run
//!   (catalog fetch).
//! - `Recoverable` — the error is reported on the console, recorded in the
//!   report, and the sequence continues (repository mirrors).
//!
//! The asymmetry between the two policies is inherited behavior and is kept
//! as-is; see DESIGN.md.

use super::catalog;
use super::mirror;
use super::provider::{CatalogProvider, DataError, GitCloner, StepProgress};
use super::soccernet;
use crate::config::{CatalogConfig, DataLayout, MirrorConfig};

/// Outcome of one acquisition step.
#[derive(Debug)]
pub enum StepOutcome {
    /// The step did its work.
    Completed,
    /// The existence guard fired; nothing was fetched or written.
    AlreadyPresent,
    /// A recoverable fault was swallowed; data for this source is absent.
    Failed(DataError),
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

/// How a step's error affects the rest of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Propagate: the run aborts immediately.
    Fatal,
    /// Swallow: record, report on the console, continue.
    Recoverable,
}

/// Per-step record in the final report.
#[derive(Debug)]
pub struct StepRecord {
    pub name: String,
    pub outcome: StepOutcome,
}

/// Summary of one downloader run.
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub steps: Vec<StepRecord>,
}

impl DownloadReport {
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|s| !s.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| s.outcome.is_failure())
    }

    pub fn outcome_of(&self, name: &str) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.outcome)
    }
}

/// Full downloader configuration: catalog step plus mirror steps, in order.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub catalog: CatalogConfig,
    pub mirrors: Vec<MirrorConfig>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            mirrors: vec![MirrorConfig::metrica(), MirrorConfig::skillcorner()],
        }
    }
}

type StepFn<'a> = Box<dyn FnOnce() -> Result<StepOutcome, DataError> + 'a>;

/// Run the acquisition sequence: catalog, mirrors, SoccerNet notice.
///
/// Ensures the data layout exists, then executes each step under its fault
/// policy. Returns the report unless a `Fatal` step errored.
pub fn run_download(
    provider: &dyn CatalogProvider,
    cloner: &dyn GitCloner,
    layout: &DataLayout,
    config: &DownloadConfig,
    progress: &dyn StepProgress,
) -> Result<DownloadReport, DataError> {
    layout.ensure_layout()?;
    let raw_dir = layout.raw_dir();
    let external_dir = layout.external_dir();

    let mut steps: Vec<(String, FaultPolicy, StepFn<'_>)> = Vec::new();

    let catalog_cfg = &config.catalog;
    steps.push((
        format!("StatsBomb 360 ({})", provider.name()),
        FaultPolicy::Fatal,
        Box::new(move || {
            catalog::fetch_catalog(provider, catalog_cfg, &raw_dir, progress)?;
            Ok(StepOutcome::Completed)
        }),
    ));

    for mirror_cfg in &config.mirrors {
        let external_dir = external_dir.clone();
        steps.push((
            mirror_cfg.name.clone(),
            FaultPolicy::Recoverable,
            Box::new(move || Ok(mirror::mirror_repository(cloner, mirror_cfg, &external_dir, progress))),
        ));
    }

    steps.push((
        "SoccerNet".to_string(),
        FaultPolicy::Recoverable,
        Box::new(move || {
            for line in soccernet::soccernet_notice() {
                progress.on_message(&line);
            }
            Ok(StepOutcome::Completed)
        }),
    ));

    let mut report = DownloadReport::default();
    let total = steps.len();

    for (i, (name, policy, run)) in steps.into_iter().enumerate() {
        progress.on_step_start(&format!("{}/{total}. {name}", i + 1));

        let outcome = match run() {
            Ok(outcome) => outcome,
            Err(err) => match policy {
                FaultPolicy::Fatal => return Err(err),
                FaultPolicy::Recoverable => StepOutcome::Failed(err),
            },
        };

        report.steps.push(StepRecord { name, outcome });
    }

    Ok(report)
}
