use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    BookArgs, CancelArgs, EditArgs, ExportArgs, RecommendArgs, RoomCommands, ScheduleArgs,
    ShowSeriesArgs,
};

/// Main command-line interface for the Roombook reservation tool
///
/// Roombook assigns reservation requests to physical rooms, guaranteeing
/// that no two accepted reservations for the same room ever overlap. It
/// supports recurring weekly series, recommends rooms for a capacity need,
/// and exports date-range schedules as CSV.
#[derive(Parser)]
#[command(version, about, name = "rb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roombook/roombook.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Roombook CLI
///
/// Room catalog administration lives under `room`; everything else operates
/// on reservation series or reads the schedule.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the room catalog
    #[command(alias = "r")]
    Room {
        #[command(subcommand)]
        command: RoomCommands,
    },
    /// Book a reservation series
    #[command(alias = "b")]
    Book(BookArgs),
    /// Replace an existing reservation series
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Cancel a reservation series
    #[command(alias = "c")]
    Cancel(CancelArgs),
    /// Show every occurrence of a series
    Show(ShowSeriesArgs),
    /// Recommend rooms for a capacity need
    Recommend(RecommendArgs),
    /// Show the schedule for a date range
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Export a date-range schedule as CSV
    Export(ExportArgs),
}
