//! tabshell - headless browser shell
//!
//! Reads one command per stdin line and answers each with one JSON
//! `CommandResult` line on stdout. Logs go to stderr.

mod commands;
mod state;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use commands::Intent;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tabshell_core::init_logging();

    let config = tabshell_core::Config::from_env().context("failed to load configuration")?;
    let state = AppState::new(config).context("failed to open browser state")?;

    tracing::info!("tabshell started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match commands::parse_line(&line) {
            Ok(Intent::Quit) => break,
            Ok(intent) => commands::dispatch(&state, intent).await,
            Err(e) => commands::CommandResult::err(e.to_string()),
        };

        println!("{}", serde_json::to_string(&response)?);
    }

    tracing::info!("tabshell exiting");
    Ok(())
}
