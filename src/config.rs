use crate::detector::Detector;
use crate::installer::{CommandInstaller, CommandSpec};
use crate::state::StateFile;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "lockcheck.toml";
static ENV_PREFIX: &str = "LOCKCHECK";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_lockfile")]
    pub lockfile: PathBuf,

    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    #[serde(default)]
    pub install_command: CommandSpec,
}

fn default_lockfile() -> PathBuf {
    PathBuf::from("package-lock.json")
}

fn default_state_file() -> PathBuf {
    PathBuf::from("package.md5")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lockfile: default_lockfile(),
            state_file: default_state_file(),
            install_command: CommandSpec::default(),
        }
    }
}

/// Values given on the command line. These win over every other source.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub lockfile: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
}

impl Config {
    /// Loads config from, in increasing priority: built-in defaults, the
    /// config file, its `.override.toml` sibling, `LOCKCHECK_*` environment
    /// variables, then `overrides`. Both files are optional.
    pub fn load(config_file: &Path, overrides: Overrides) -> Result<Config> {
        Self::load_with_env(config_file, overrides, None)
    }

    /// As [`Config::load`], reading environment variables from `env` instead
    /// of the process environment when given.
    pub fn load_with_env(
        config_file: &Path,
        overrides: Overrides,
        env: Option<HashMap<String, String>>,
    ) -> Result<Config> {
        let mut settings: Config = config::Config::builder()
            .add_source(
                config::File::new(&config_file.to_string_lossy(), config::FileFormat::Toml)
                    .required(false),
            )
            // Used to override the version in a repo with your own custom local overrides.
            .add_source(
                config::File::new(
                    &override_file_path(config_file).to_string_lossy(),
                    config::FileFormat::Toml,
                )
                .required(false),
            )
            // Eg. `LOCKCHECK_INSTALL_COMMAND="yarn install --frozen-lockfile"`
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .context(format!("could not load config from {}", config_file.display()))?
            .try_deserialize()
            .context("could not deserialise config struct")?;

        if let Some(lockfile) = overrides.lockfile {
            settings.lockfile = lockfile;
        }
        if let Some(state_file) = overrides.state_file {
            settings.state_file = state_file;
        }

        Ok(settings)
    }

    /// Writes this config as TOML to `path`, refusing to replace an existing
    /// file.
    pub fn save_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow!(
                "Config file '{}' already exists. Use a different path or remove the existing file.",
                path.display()
            ));
        }

        let toml_str =
            toml::to_string_pretty(self).context("could not convert config to toml")?;
        fs::write(path, toml_str)
            .context(format!("failed writing config file {}", path.display()))?;

        Ok(())
    }

    pub fn state(&self) -> StateFile {
        StateFile::new(&self.state_file)
    }

    pub fn installer(&self) -> Result<CommandInstaller> {
        CommandInstaller::new(&self.install_command).context("invalid install_command")
    }

    pub fn detector(&self) -> Result<Detector<CommandInstaller>> {
        Ok(Detector::new(&self.lockfile, self.state(), self.installer()?))
    }
}

fn override_file_path(config_file: &Path) -> PathBuf {
    config_file.with_extension("override.toml")
}
