use crate::commands::Outcome;
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Init command - special case that doesn't implement Command trait
/// because it doesn't require a loaded Config (it creates the config).
pub struct Init {
    pub config_file: PathBuf,
}

impl Init {
    pub fn execute(&self) -> Result<Outcome> {
        let config = Config::default();
        config
            .save_new(&self.config_file)
            .map_err(|e| e.context("Failed to write config file"))?;

        println!("Created {}", self.config_file.display());
        println!(
            "  lockfile:   {}\n  state file: {}",
            config.lockfile.display(),
            config.state_file.display()
        );
        println!(
            "\nEdit {} to change the lockfile or install command.",
            self.config_file.display()
        );

        Ok(Outcome::Initialized(self.config_file.clone()))
    }
}
