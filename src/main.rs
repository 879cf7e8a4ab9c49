use clap::Parser;
use console::style;
use lockcheck::cli::{run_cli, Cli};
use lockcheck::error::LockcheckError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    lockcheck::logging::init(cli.debug);

    match run_cli(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<LockcheckError>())
                .map_or(1, LockcheckError::exit_code);
            ExitCode::from(code)
        }
    }
}
