// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use ncaa_casablanca::config::Config;
use ncaa_casablanca::container::Container;
use ncaa_casablanca::error::AppError;
use std::process::ExitCode;
use tracing::{error, info};

async fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, config.log_file_path.as_ref()).await?;
    info!("Logs are written to {log_file_path}");

    let container = Container::with_logging(config)?;
    commands::run_command(&args.command, &container)
        .await
        .inspect_err(|e| error!("Command failed: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
