use crate::commands::{Check, Command, Init, Install, Outcome, Reset, Status};
use crate::config::{Config, Overrides, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info_span;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub debug: bool,

    #[arg(global = true, short, long, default_value = CONFIG_FILE_NAME)]
    pub config_file: PathBuf,

    /// Lockfile to fingerprint (default: package-lock.json)
    #[arg(global = true, long)]
    pub lockfile: Option<PathBuf>,

    /// File the last installed fingerprint is recorded in (default: package.md5)
    #[arg(global = true, long)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the lockfile changed since the last install.  Exits
    /// non-zero on a change unless --run is given.
    Check {
        /// Install and record the new fingerprint when a change is found
        #[arg(long)]
        run: bool,
    },
    /// Install if the lockfile changed, then record the new fingerprint
    Run,
    /// Install unconditionally, then record the fingerprint
    Install,
    /// Record the current fingerprint without installing
    Reset,
    /// Show the current and recorded fingerprints
    Status,
    /// Write a default config file
    Init,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            lockfile: self.lockfile.clone(),
            state_file: self.state_file.clone(),
        }
    }
}

pub fn run_cli(cli: Cli) -> Result<Outcome> {
    let command: Box<dyn Command> = match &cli.command {
        None => {
            Cli::command().print_help()?;
            return Ok(Outcome::Help);
        }
        Some(Commands::Init) => {
            let _span = info_span!("command", name = "init").entered();
            return Init {
                config_file: cli.config_file.clone(),
            }
            .execute();
        }
        Some(Commands::Check { run }) => Box::new(Check { run: *run }),
        Some(Commands::Run) => Box::new(Check { run: true }),
        Some(Commands::Install) => Box::new(Install),
        Some(Commands::Reset) => Box::new(Reset),
        Some(Commands::Status) => Box::new(Status),
    };

    let config = Config::load(&cli.config_file, cli.overrides()).context(format!(
        "could not load config from {}",
        cli.config_file.display()
    ))?;

    let _span = info_span!("command", name = command.label()).entered();
    tracing::debug!(?config, "loaded config");

    command.execute(&config)
}
