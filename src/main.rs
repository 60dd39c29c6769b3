mod cli;
mod error;
mod services;
mod state;

use std::process::ExitCode;

use clap::Parser;
use game::config::GameConfig;
use tokio::io::BufReader;

use crate::cli::Args;
use crate::error::AppError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the game transcript.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sketchguess failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = GameConfig::from_env()?;
    tracing::info!(?config, tick_ms = args.tick_ms, "config loaded");

    let mut state = AppState::new(&args, config)?;
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let summaries = services::driver::run(&mut state, input, &mut stdout, args.tick()).await?;
    tracing::info!(rounds = summaries.len(), "session ended");
    Ok(())
}
