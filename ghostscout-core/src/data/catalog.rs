//! Catalog filtering and CSV output.
//!
//! The filter keeps rows that have 360 tracking coverage AND belong to one
//! of the configured target competitions. Rows pass through unchanged and
//! in source order; the CSV is overwritten unconditionally on every run.

use super::provider::{CatalogProvider, CompetitionRow, DataError, StepProgress};
use crate::config::CatalogConfig;
use std::path::Path;

/// Keep rows with non-null 360 availability and a target competition name.
///
/// Source order is preserved; nothing is deduplicated or mutated.
pub fn filter_catalog(rows: Vec<CompetitionRow>, targets: &[String]) -> Vec<CompetitionRow> {
    rows.into_iter()
        .filter(|row| row.match_available_360.is_some())
        .filter(|row| targets.iter().any(|t| t == &row.competition_name))
        .collect()
}

/// Column order of the catalog CSV, matching the source catalog subset.
const CATALOG_COLUMNS: [&str; 12] = [
    "competition_id",
    "season_id",
    "country_name",
    "competition_name",
    "competition_gender",
    "competition_youth",
    "competition_international",
    "season_name",
    "match_updated",
    "match_updated_360",
    "match_available_360",
    "match_available",
];

/// Write the catalog subset as CSV with a header row, replacing any prior
/// copy. No merge with existing content.
///
/// The header is written up front so an empty filter result still produces
/// a header-only file rather than a zero-byte one.
pub fn write_catalog_csv(rows: &[CompetitionRow], path: &Path) -> Result<(), DataError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| DataError::CatalogWrite(e.to_string()))?;
    writer
        .write_record(CATALOG_COLUMNS)
        .map_err(|e| DataError::CatalogWrite(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| DataError::CatalogWrite(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| DataError::CatalogWrite(e.to_string()))?;
    Ok(())
}

/// Fetch, filter, and persist the competitions catalog.
///
/// Faults propagate: this step has no recovery path and aborts the whole
/// downloader run (in contrast to the mirror steps).
pub fn fetch_catalog(
    provider: &dyn CatalogProvider,
    config: &CatalogConfig,
    raw_dir: &Path,
    progress: &dyn StepProgress,
) -> Result<usize, DataError> {
    let rows = provider.fetch_competitions()?;
    let targets = filter_catalog(rows, &config.target_competitions);

    progress.on_message(&format!("Competitions found: {}", targets.len()));
    for row in &targets {
        progress.on_message(&format!(
            "  {} — {}",
            row.competition_name, row.season_name
        ));
    }

    let output = raw_dir.join(&config.output_file);
    write_catalog_csv(&targets, &output)?;
    progress.on_message(&format!("Catalog saved to {}", output.display()));

    Ok(targets.len())
}
