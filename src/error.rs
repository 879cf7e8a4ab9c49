use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fingerprinting, recording or installing.
///
/// Every variant is fatal for the invocation. `main` maps them onto a
/// process exit code with [`LockcheckError::exit_code`].
#[derive(Debug, Error)]
pub enum LockcheckError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch install command '{program}'")]
    InstallLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("install command '{command}' failed with {}", describe_code(.code))]
    InstallFailed { command: String, code: Option<i32> },

    #[error("install command is empty")]
    EmptyInstallCommand,

    #[error("install command '{0}' could not be parsed (unbalanced quotes?)")]
    InvalidInstallCommand(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl LockcheckError {
    /// Exit code the process should terminate with. A failing install
    /// forwards the child's own code when it has a usable one.
    pub fn exit_code(&self) -> u8 {
        match self {
            LockcheckError::InstallFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

pub type Result<T, E = LockcheckError> = std::result::Result<T, E>;
