use crate::commands::{Command, Outcome};
use crate::config::Config;
use crate::detector::CheckResult;
use crate::installer::Installer;
use anyhow::{Context, Result};
use console::style;

/// Compares the lockfile with the recorded fingerprint. With `run` set, a
/// change triggers the install and the new fingerprint is recorded.
pub struct Check {
    pub run: bool,
}

impl Command for Check {
    fn label(&self) -> &'static str {
        if self.run {
            "run"
        } else {
            "check"
        }
    }

    fn execute(&self, config: &Config) -> Result<Outcome> {
        let detector = config.detector()?;

        if self.run {
            // Announce before the package manager starts printing.
            let status = detector.status()?;
            if !status.in_sync() {
                println!(
                    "{} {} changed, running {}",
                    style("→").cyan(),
                    detector.lockfile().display(),
                    style(detector.installer().describe()).bold()
                );
            }
        }

        let result = detector
            .check(self.run)
            .context(format!("check of {} failed", detector.lockfile().display()))?;

        match result {
            CheckResult::NoChange(_) => {
                println!(
                    "{} {} unchanged, nothing to install",
                    style("✓").green(),
                    detector.lockfile().display()
                );
                Ok(Outcome::NoChange)
            }
            CheckResult::ChangeDetected { recorded, .. } => {
                let reason = match recorded {
                    Some(_) => "has changed since the last install",
                    None => "has no recorded install",
                };
                println!(
                    "{} {} {}. Run {} or {} to install.",
                    style("!").yellow().bold(),
                    detector.lockfile().display(),
                    reason,
                    style("lockcheck run").bold(),
                    style(detector.installer().describe()).bold()
                );
                Ok(Outcome::ChangeDetected)
            }
            CheckResult::Installed { current, .. } => {
                println!(
                    "{} installed dependencies, recorded {} in {}",
                    style("✓").green(),
                    style(&current).dim(),
                    detector.state().path().display()
                );
                Ok(Outcome::Installed {
                    fingerprint: current,
                })
            }
        }
    }
}
