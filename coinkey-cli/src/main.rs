//! coinkey command-line front end
//!
//! Derives a coin address, WIF private keys and an optional onion v3
//! address from a secp256k1 private scalar, and decodes or validates those
//! strings. Defaults come from `COINKEY_NETWORK`, `COINKEY_OUTPUT` and
//! `COINKEY_ONION_SEED`; flags override them. Logging goes through
//! `env_logger` and is controlled by `RUST_LOG`.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::{CliConfig, OutputFormat};
use error::CliError;

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = CliConfig::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Commands::Derive(args) => {
            let bundle = commands::derive(&args, &config)?;
            print!("{}", output::render_bundle(&bundle, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { address } => {
            let result = commands::validate(&address)?;
            print!("{}", output::render_validation(&result, format)?);
            Ok(if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::DecodeWif { wif } => {
            let summary = commands::decode_wif(&wif)?;
            print!("{}", output::render_wif(&summary, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
