//! streak CLI application
//!
//! Command-line interface and MCP server for the streak habit tracker.

mod args;
mod cli;
mod mcp;
mod menu;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StreakMcpServer};
use menu::Menu;
use renderer::TerminalRenderer;
use streak_core::TrackerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        backend,
        today,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_backend(backend)
        .with_data_path(data_file)
        .with_today(today)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!(
        "streak started ({} store at {})",
        backend,
        tracker.store().location().display()
    );

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));
    match command.unwrap_or(Commands::Status) {
        Commands::User(args) => cli.set_user(&args.into()).await,
        Commands::Add(args) => cli.add_habit(&args.into()).await,
        Commands::Delete(args) => cli.delete_habit(&args.into()).await,
        Commands::CheckIn(args) => cli.check_in(&args.into()).await,
        Commands::Main(args) => cli.toggle_main_habit(&args.into()).await,
        Commands::Status => cli.status().await,
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(cli.tracker(), stdin.lock(), io::stdout())
                .run()
                .await
        }
        Commands::Serve => {
            info!("Starting streak MCP server");
            run_stdio_server(StreakMcpServer::new(cli.into_tracker()))
                .await
                .context("MCP server failed")
        }
    }
}
