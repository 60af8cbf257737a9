//! Acquisition configuration — data layout, catalog filters, mirror targets.
//!
//! Every URL, path, and filter criterion the downloader uses lives here as a
//! named field with a default, so tests can point steps at fixture data
//! instead of the real providers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk layout for acquired data.
///
/// Everything lands under a single base directory:
/// - `{data_dir}/raw` — catalog CSV and manually placed Sportec XML files
/// - `{data_dir}/external` — full mirror clones, one subdirectory per source
#[derive(Debug, Clone)]
pub struct DataLayout {
    pub data_dir: PathBuf,
}

impl DataLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    pub fn external_dir(&self) -> PathBuf {
        self.data_dir.join("external")
    }

    /// Create the `raw` and `external` directories if absent.
    ///
    /// Idempotent — repeat invocations are no-ops. Each process run is
    /// independent; no locking is needed.
    pub fn ensure_layout(&self) -> io::Result<()> {
        fs::create_dir_all(self.raw_dir())?;
        fs::create_dir_all(self.external_dir())?;
        Ok(())
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new("data")
    }
}

/// StatsBomb catalog step: source endpoint, competition filter, output file.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Competitions endpoint of the StatsBomb open-data repository.
    pub source_url: String,
    /// Competitions kept after the 360-availability filter.
    pub target_competitions: Vec<String>,
    /// File name of the catalog CSV, written under `raw_dir()`.
    pub output_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_url:
                "https://raw.githubusercontent.com/statsbomb/open-data/master/data/competitions.json"
                    .into(),
            target_competitions: vec!["UEFA Euro".into(), "FIFA World Cup".into()],
            output_file: "statsbomb_360_catalog.csv".into(),
        }
    }
}

/// One repository-mirror step: remote URL and target subdirectory.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Human-readable source name, used in console output.
    pub name: String,
    pub repo_url: String,
    /// Subdirectory under `external_dir()` the clone lands in.
    pub subdir: String,
}

impl MirrorConfig {
    /// Metrica Sports sample data (continuous tracking).
    pub fn metrica() -> Self {
        Self {
            name: "Metrica Sports".into(),
            repo_url: "https://github.com/metrica-sports/sample-data.git".into(),
            subdir: "metrica_sports".into(),
        }
    }

    /// SkillCorner open data (broadcast tracking, 9 matches).
    pub fn skillcorner() -> Self {
        Self {
            name: "SkillCorner".into(),
            repo_url: "https://github.com/SkillCorner/opendata.git".into(),
            subdir: "skillcorner".into(),
        }
    }

    /// Absolute clone target for this mirror.
    pub fn target(&self, external_dir: &Path) -> PathBuf {
        external_dir.join(&self.subdir)
    }
}

/// Sportec input files, expected as manually placed files under `raw_dir()`.
#[derive(Debug, Clone)]
pub struct SportecFiles {
    pub events_file: String,
    pub meta_data_file: String,
}

impl SportecFiles {
    pub fn events_path(&self, raw_dir: &Path) -> PathBuf {
        raw_dir.join(&self.events_file)
    }

    pub fn meta_data_path(&self, raw_dir: &Path) -> PathBuf {
        raw_dir.join(&self.meta_data_file)
    }
}

impl Default for SportecFiles {
    fn default() -> Self {
        Self {
            events_file: "sportec_events.xml".into(),
            meta_data_file: "sportec_metadata.xml".into(),
        }
    }
}

/// Pitch geometry used to re-origin event coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchDimensions {
    pub length: f64,
    pub width: f64,
}

impl Default for PitchDimensions {
    fn default() -> Self {
        Self {
            length: 105.0,
            width: 68.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("ghostscout_config_{}_{id}", std::process::id()))
    }

    #[test]
    fn layout_paths_hang_off_data_dir() {
        let layout = DataLayout::new("/tmp/gs");
        assert_eq!(layout.raw_dir(), PathBuf::from("/tmp/gs/raw"));
        assert_eq!(layout.external_dir(), PathBuf::from("/tmp/gs/external"));
    }

    #[test]
    fn ensure_layout_is_idempotent() {
        let dir = temp_dir();
        let layout = DataLayout::new(&dir);

        layout.ensure_layout().unwrap();
        assert!(layout.raw_dir().is_dir());
        assert!(layout.external_dir().is_dir());

        // Second call must not fail on pre-existing directories
        layout.ensure_layout().unwrap();

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn mirror_target_joins_subdir() {
        let metrica = MirrorConfig::metrica();
        assert_eq!(
            metrica.target(Path::new("data/external")),
            PathBuf::from("data/external/metrica_sports")
        );
        let skillcorner = MirrorConfig::skillcorner();
        assert_eq!(skillcorner.subdir, "skillcorner");
    }

    #[test]
    fn default_catalog_targets_euro_and_world_cup() {
        let cfg = CatalogConfig::default();
        assert_eq!(
            cfg.target_competitions,
            vec!["UEFA Euro".to_string(), "FIFA World Cup".to_string()]
        );
        assert_eq!(cfg.output_file, "statsbomb_360_catalog.csv");
    }
}
