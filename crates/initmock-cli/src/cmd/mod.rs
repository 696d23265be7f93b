use anyhow::Result;

use crate::args::{Cli, Command};

mod generate;
mod inspect;

pub fn dispatch(cli: Cli) -> Result<()> {
    // No subcommand means the plain run-once flow.
    let command = cli.command.clone().unwrap_or(Command::Generate {
        auth_date: None,
        user: None,
    });

    match command {
        Command::Generate { auth_date, user } => {
            generate::run(&cli.env_file, auth_date, user.as_deref())
        }
        Command::Inspect { init_data } => inspect::run(&init_data),
    }
}
