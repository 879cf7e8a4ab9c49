use crate::config::Config;
use crate::fingerprint::Fingerprint;
use anyhow::Result;
use std::path::PathBuf;

pub mod check;
pub mod init;
pub mod install;
pub mod reset;
pub mod status;

pub use check::Check;
pub use init::Init;
pub use install::Install;
pub use reset::Reset;
pub use status::Status;

/// Trait for executable commands.
pub trait Command {
    /// Short name used to tag log output, e.g. "check".
    fn label(&self) -> &'static str;

    fn execute(&self, config: &Config) -> Result<Outcome>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Lockfile matches the record, nothing was done.
    NoChange,
    /// Lockfile changed and no install was requested. Exits non-zero.
    ChangeDetected,
    Installed { fingerprint: Fingerprint },
    Recorded { fingerprint: Fingerprint },
    Status { in_sync: bool },
    Initialized(PathBuf),
    /// No subcommand given, help was printed.
    Help,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::ChangeDetected => 1,
            _ => 0,
        }
    }
}
