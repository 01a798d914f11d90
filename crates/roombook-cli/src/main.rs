//! Roombook CLI Application
//!
//! Command-line interface for the Roombook room reservation tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use roombook_core::SchedulerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(scheduler, renderer);

    info!("Roombook started");

    match command {
        Some(Room { command }) => cli.handle_room_command(command).await,
        Some(Book(args)) => cli.book(args).await,
        Some(Edit(args)) => cli.edit(args).await,
        Some(Cancel(args)) => cli.cancel(args).await,
        Some(Show(args)) => cli.show_series(args).await,
        Some(Recommend(args)) => cli.recommend(args).await,
        Some(Schedule(args)) => cli.schedule(args).await,
        Some(Export(args)) => cli.export(args).await,
        None => cli.list_rooms().await,
    }
}
