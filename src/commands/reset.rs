use crate::commands::{Command, Outcome};
use crate::config::Config;
use anyhow::{Context, Result};
use console::style;

/// Records the current lockfile fingerprint without installing, for when the
/// installed dependencies are known to already match the lockfile.
pub struct Reset;

impl Command for Reset {
    fn label(&self) -> &'static str {
        "reset"
    }

    fn execute(&self, config: &Config) -> Result<Outcome> {
        let detector = config.detector()?;
        let fingerprint = detector.reset().context("could not record fingerprint")?;

        println!(
            "{} recorded {} for {} in {}",
            style("✓").green(),
            style(&fingerprint).dim(),
            detector.lockfile().display(),
            detector.state().path().display()
        );

        Ok(Outcome::Recorded { fingerprint })
    }
}
