use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::installer::Installer;
use crate::state::StateFile;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of comparing the lockfile against the recorded fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckResult {
    /// The recorded fingerprint matches the lockfile.
    NoChange(Fingerprint),
    /// The lockfile differs from the record (or there is no record) and no
    /// install was attempted. Nothing was written.
    ChangeDetected {
        current: Fingerprint,
        recorded: Option<Fingerprint>,
    },
    /// The lockfile differed, the install ran successfully and the new
    /// fingerprint was recorded.
    Installed {
        current: Fingerprint,
        recorded: Option<Fingerprint>,
    },
}

/// Current and recorded fingerprints side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub current: Fingerprint,
    pub recorded: Option<Fingerprint>,
}

impl Status {
    pub fn in_sync(&self) -> bool {
        self.recorded.as_ref() == Some(&self.current)
    }
}

/// Ties a lockfile, its sidecar state file and an installer together.
///
/// Each operation runs start to finish in one call. Nothing is cached
/// between calls, the state file on disk is the only memory.
pub struct Detector<I> {
    lockfile: PathBuf,
    state: StateFile,
    installer: I,
}

impl<I: Installer> Detector<I> {
    pub fn new(lockfile: impl Into<PathBuf>, state: StateFile, installer: I) -> Self {
        Self {
            lockfile: lockfile.into(),
            state,
            installer,
        }
    }

    pub fn lockfile(&self) -> &Path {
        &self.lockfile
    }

    pub fn state(&self) -> &StateFile {
        &self.state
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn fingerprint(&self) -> Result<Fingerprint> {
        Fingerprint::of_file(&self.lockfile)
    }

    pub fn load_recorded(&self) -> Result<Option<Fingerprint>> {
        self.state.load()
    }

    pub fn save(&self, fingerprint: &Fingerprint) -> Result<()> {
        self.state.save(fingerprint)
    }

    pub fn run_install(&self) -> Result<()> {
        self.installer.install()
    }

    /// Compares the lockfile with the record. With `auto_run`, a change
    /// triggers the install and, only if it succeeds, records the new
    /// fingerprint. Without it, a change is reported and nothing is written.
    pub fn check(&self, auto_run: bool) -> Result<CheckResult> {
        let Status { current, recorded } = self.status()?;

        if recorded.as_ref() == Some(&current) {
            debug!(%current, "lockfile unchanged");
            return Ok(CheckResult::NoChange(current));
        }

        debug!(
            %current,
            recorded = recorded.as_ref().map(|r| r.as_str()).unwrap_or("<none>"),
            auto_run,
            "lockfile changed"
        );

        if !auto_run {
            return Ok(CheckResult::ChangeDetected { current, recorded });
        }

        self.run_install()?;
        self.save(&current)?;

        Ok(CheckResult::Installed { current, recorded })
    }

    /// Records the lockfile's current fingerprint without installing.
    pub fn reset(&self) -> Result<Fingerprint> {
        let current = self.fingerprint()?;
        self.save(&current)?;
        Ok(current)
    }

    /// Installs unconditionally, then records the fingerprint the lockfile
    /// had before the install started.
    pub fn install(&self) -> Result<Fingerprint> {
        let current = self.fingerprint()?;
        self.run_install()?;
        self.save(&current)?;
        Ok(current)
    }

    pub fn status(&self) -> Result<Status> {
        let current = self.fingerprint()?;
        let recorded = self.load_recorded()?;
        Ok(Status { current, recorded })
    }
}
