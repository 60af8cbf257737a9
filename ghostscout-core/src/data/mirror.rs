//! Mirror-by-clone step for the tracking-data git repositories.
//!
//! Idempotence rests on a bare path-existence check: if the target directory
//! is already there, the clone is skipped regardless of what the directory
//! contains or which revision it holds. This is a known limitation carried
//! over deliberately — verifying content or version would change observable
//! behavior (a half-finished clone today suppresses any retry).

use super::download::StepOutcome;
use super::provider::{DataError, GitCloner, StepProgress};
use crate::config::MirrorConfig;
use std::path::Path;
use std::process::Command;

/// Cloner that shells out to the system `git` binary.
pub struct SystemGit;

impl GitCloner for SystemGit {
    fn clone_repo(&self, repo_url: &str, target: &Path) -> Result<(), DataError> {
        let output = Command::new("git")
            .arg("clone")
            .arg(repo_url)
            .arg(target)
            .output()
            .map_err(|e| DataError::CloneFailed {
                url: repo_url.to_string(),
                detail: format!("failed to spawn git: {e}"),
            })?;

        if !output.status.success() {
            return Err(DataError::CloneFailed {
                url: repo_url.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Mirror one remote repository into its target under `external_dir`.
///
/// Never returns an error: a clone fault is reported through `progress` and
/// folded into the outcome, so the caller's step sequence always continues.
pub fn mirror_repository(
    cloner: &dyn GitCloner,
    config: &MirrorConfig,
    external_dir: &Path,
    progress: &dyn StepProgress,
) -> StepOutcome {
    let target = config.target(external_dir);

    if target.exists() {
        progress.on_message(&format!(
            "{} data already present at {}",
            config.name,
            target.display()
        ));
        return StepOutcome::AlreadyPresent;
    }

    progress.on_message(&format!(
        "Cloning {} repository into {}...",
        config.name,
        target.display()
    ));

    match cloner.clone_repo(&config.repo_url, &target) {
        Ok(()) => {
            progress.on_message("Download finished successfully.");
            StepOutcome::Completed
        }
        Err(err) => {
            progress.on_recoverable_failure(&config.name, &err);
            StepOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::SilentProgress;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_external() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir =
            std::env::temp_dir().join(format!("ghostscout_mirror_{}_{id}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Records clone calls; creates the target directory on success.
    struct FakeCloner {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeCloner {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl GitCloner for FakeCloner {
        fn clone_repo(&self, repo_url: &str, target: &Path) -> Result<(), DataError> {
            self.calls.borrow_mut().push(repo_url.to_string());
            if self.fail {
                return Err(DataError::CloneFailed {
                    url: repo_url.to_string(),
                    detail: "connection refused".into(),
                });
            }
            std::fs::create_dir_all(target)?;
            std::fs::write(target.join("README.md"), "sample")?;
            Ok(())
        }
    }

    #[test]
    fn absent_target_triggers_exactly_one_clone() {
        let external = temp_external();
        let cloner = FakeCloner::new(false);

        let outcome =
            mirror_repository(&cloner, &MirrorConfig::metrica(), &external, &SilentProgress);

        assert!(matches!(outcome, StepOutcome::Completed));
        assert_eq!(cloner.calls.borrow().len(), 1);
        assert!(external.join("metrica_sports").join("README.md").exists());

        let _ = std::fs::remove_dir_all(&external);
    }

    #[test]
    fn existing_target_skips_clone_regardless_of_content() {
        let external = temp_external();
        // Empty directory, not a valid clone — still counts as present
        std::fs::create_dir_all(external.join("skillcorner")).unwrap();
        let cloner = FakeCloner::new(false);

        let outcome = mirror_repository(
            &cloner,
            &MirrorConfig::skillcorner(),
            &external,
            &SilentProgress,
        );

        assert!(matches!(outcome, StepOutcome::AlreadyPresent));
        assert!(cloner.calls.borrow().is_empty());

        let _ = std::fs::remove_dir_all(&external);
    }

    #[test]
    fn clone_fault_is_swallowed_into_failed_outcome() {
        let external = temp_external();
        let cloner = FakeCloner::new(true);

        let outcome =
            mirror_repository(&cloner, &MirrorConfig::metrica(), &external, &SilentProgress);

        assert!(matches!(outcome, StepOutcome::Failed(_)));
        assert!(!external.join("metrica_sports").exists());

        let _ = std::fs::remove_dir_all(&external);
    }
}
