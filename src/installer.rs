// Runs the project's dependency-restore command (`npm ci` by default) as a
// child process. Output is inherited so the user sees the package manager's
// progress and errors directly.

use crate::error::{LockcheckError, Result};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// How the install command is written in config: either a single shell-style
/// line, or the argv spelled out.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CommandSpec {
    Line(String),
    Direct(Vec<String>),
}

impl Default for CommandSpec {
    fn default() -> Self {
        CommandSpec::Line("npm ci".to_string())
    }
}

impl CommandSpec {
    /// Resolves the spec into argv. Lines are split with POSIX shell word
    /// rules, without any expansion.
    pub fn resolve(&self) -> Result<Vec<String>> {
        let argv = match self {
            CommandSpec::Line(line) => shlex::split(line)
                .ok_or_else(|| LockcheckError::InvalidInstallCommand(line.clone()))?,
            CommandSpec::Direct(argv) => argv.clone(),
        };

        if argv.first().map_or(true, |program| program.is_empty()) {
            return Err(LockcheckError::EmptyInstallCommand);
        }

        Ok(argv)
    }
}

/// Something that can restore dependencies from the lockfile.
pub trait Installer {
    fn install(&self) -> Result<()>;

    /// Human readable form of what `install` runs.
    fn describe(&self) -> String;
}

#[derive(Clone, Debug)]
pub struct CommandInstaller {
    argv: Vec<String>,
}

impl CommandInstaller {
    pub fn new(spec: &CommandSpec) -> Result<Self> {
        Ok(Self {
            argv: spec.resolve()?,
        })
    }
}

impl Installer for CommandInstaller {
    fn install(&self) -> Result<()> {
        let command = self.describe();
        info!(%command, "running install command");

        let status = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LockcheckError::InstallLaunch {
                program: self.argv[0].clone(),
                source,
            })?;

        debug!(%command, ?status, "install command finished");

        if !status.success() {
            return Err(LockcheckError::InstallFailed {
                command,
                code: status.code(),
            });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        shlex::try_join(self.argv.iter().map(|s| s.as_str()))
            .unwrap_or_else(|_| self.argv.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_npm_ci() -> anyhow::Result<()> {
        assert_eq!(CommandSpec::default().resolve()?, vec!["npm", "ci"]);
        Ok(())
    }

    #[test]
    fn line_is_split_with_shell_rules() -> anyhow::Result<()> {
        let spec = CommandSpec::Line("yarn install --frozen-lockfile --cache-folder 'my cache'".into());
        assert_eq!(
            spec.resolve()?,
            vec!["yarn", "install", "--frozen-lockfile", "--cache-folder", "my cache"]
        );
        Ok(())
    }

    #[test]
    fn direct_is_used_as_is() -> anyhow::Result<()> {
        let spec = CommandSpec::Direct(vec!["pnpm".into(), "install".into(), "a b".into()]);
        assert_eq!(spec.resolve()?, vec!["pnpm", "install", "a b"]);
        Ok(())
    }

    #[test]
    fn empty_commands_are_rejected() {
        for spec in [
            CommandSpec::Line(String::new()),
            CommandSpec::Line("   ".into()),
            CommandSpec::Direct(vec![]),
            CommandSpec::Direct(vec![String::new()]),
        ] {
            assert!(
                matches!(spec.resolve(), Err(LockcheckError::EmptyInstallCommand)),
                "{:?}",
                spec
            );
        }
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let spec = CommandSpec::Line("npm 'ci".into());
        assert!(matches!(
            spec.resolve(),
            Err(LockcheckError::InvalidInstallCommand(_))
        ));
    }

    #[test]
    fn describe_quotes_arguments() -> anyhow::Result<()> {
        let argv = vec![
            "npm".to_string(),
            "ci".to_string(),
            "--prefix".to_string(),
            "my dir".to_string(),
        ];
        let installer = CommandInstaller::new(&CommandSpec::Direct(argv.clone()))?;

        let described = installer.describe();
        assert!(described.starts_with("npm ci --prefix "));
        assert_eq!(shlex::split(&described), Some(argv));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn successful_command() -> anyhow::Result<()> {
        let installer = CommandInstaller::new(&CommandSpec::Line("true".into()))?;
        installer.install()?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_exit_code() -> anyhow::Result<()> {
        let installer = CommandInstaller::new(&CommandSpec::Line("sh -c 'exit 7'".into()))?;
        match installer.install() {
            Err(LockcheckError::InstallFailed { code, .. }) => assert_eq!(code, Some(7)),
            other => panic!("expected install failure, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn missing_program_is_a_launch_error() -> anyhow::Result<()> {
        let installer =
            CommandInstaller::new(&CommandSpec::Line("lockcheck-no-such-program-xyz".into()))?;
        assert!(matches!(
            installer.install(),
            Err(LockcheckError::InstallLaunch { .. })
        ));
        Ok(())
    }
}
