use tally_client::commands;
use tally_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};
use crate::settings::Settings;

pub fn dispatch(cli: &Cli, settings: &Settings) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Categories { path, by, .. } => {
            commands::categories::run(path.clone(), (*by).into())
        }
        Commands::Transactions { path, .. } => {
            commands::transactions::run(path.clone(), settings.now())
        }
    }
}
