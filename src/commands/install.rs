use crate::commands::{Command, Outcome};
use crate::config::Config;
use crate::installer::Installer;
use anyhow::{Context, Result};
use console::style;

/// Installs regardless of the recorded fingerprint, then records it.
pub struct Install;

impl Command for Install {
    fn label(&self) -> &'static str {
        "install"
    }

    fn execute(&self, config: &Config) -> Result<Outcome> {
        let detector = config.detector()?;

        println!(
            "{} running {}",
            style("→").cyan(),
            style(detector.installer().describe()).bold()
        );

        let fingerprint = detector.install().context("install failed")?;

        println!(
            "{} installed dependencies, recorded {} in {}",
            style("✓").green(),
            style(&fingerprint).dim(),
            detector.state().path().display()
        );

        Ok(Outcome::Installed { fingerprint })
    }
}
