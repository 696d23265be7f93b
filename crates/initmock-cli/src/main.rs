use std::process::ExitCode;

use clap::Parser;

use initmock_core::InitDataError;

mod args;
mod cmd;
mod config;
mod output;

fn main() -> ExitCode {
    let cli = args::Cli::parse();
    output::init(cli.json);

    match cmd::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::eprintln_line(&format!("error: {err:#}"));
            if matches!(
                err.downcast_ref::<InitDataError>(),
                Some(InitDataError::Config { .. })
            ) {
                output::eprintln_line("");
                output::eprintln_line("Expected env file contents:");
                output::eprintln_line("BOT_TOKEN=your_bot_token_here");
            }
            ExitCode::FAILURE
        }
    }
}
