// The sidecar file holds the fingerprint recorded by the last successful
// install or reset. Its whole content is the fingerprint string, nothing else.

use crate::error::{LockcheckError, Result};
use crate::fingerprint::Fingerprint;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the recorded fingerprint, or `None` when no record exists yet.
    /// Any failure other than "not found" is an error.
    pub fn load(&self) -> Result<Option<Fingerprint>> {
        match fs::read(&self.path) {
            Ok(contents) => {
                let value = String::from_utf8_lossy(&contents).into_owned();
                debug!(path = %self.path.display(), recorded = %value, "loaded state file");
                Ok(Some(Fingerprint::from_recorded(value)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file, treating as no prior record");
                Ok(None)
            }
            Err(source) => Err(LockcheckError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the record with `fingerprint`. Writes a sibling temporary
    /// file first and renames it into place.
    pub fn save(&self, fingerprint: &Fingerprint) -> Result<()> {
        let tmp_path = self.tmp_path();
        let write_err = |source: io::Error| LockcheckError::Write {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp_path, fingerprint.as_str()).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }

        debug!(path = %self.path.display(), %fingerprint, "saved state file");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        // Nightly has an add_extension that might be good to use one day if it
        // enters stable.
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("lockcheck"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
