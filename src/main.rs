use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;

use cli::{output, Cli, Commands};

fn main() -> ExitCode {
    let args = Cli::parse();
    output::configure(args.color);

    args.logging_config().init();

    let result = match &args.command {
        Commands::Defaults(defaults) => cli::defaults::execute(defaults),
        Commands::Check(check) => cli::check::execute(check),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
