//! doc-onlook CLI - find doc-onlook receivers and send them files.
//!
//! Terminal front end for the doc-onlook sender protocol, usable from scripts
//! and headless machines.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod payload;
#[cfg(test)]
mod test_support;

use clap::Parser;
use doc_onlook_core::{ClientConfig, DeviceClient};

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::default();
    if let Some(timeout) = cli.request_timeout() {
        config = config.with_timeout(timeout);
    }
    let client = DeviceClient::http(&config)?;

    match cli.command {
        Commands::Find(args) => commands::run_find(args, &client, cli.json, cli.strict).await,
        Commands::Send(args) => commands::run_send(args, &client, cli.json, cli.strict).await,
    }
}
