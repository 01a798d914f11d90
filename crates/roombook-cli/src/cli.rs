//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures and their conversions
//! into core parameter types, plus the [`Cli`] handler that runs commands
//! against the scheduler and renders the results.
//!
//! The parameter wrapper pattern keeps clap concerns out of the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each argument struct carries clap derives and converts into its core
//! counterpart with an explicit `From` impl, so the boundary between CLI
//! parsing and domain logic stays compile-time checked.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::Date;
use jiff::{tz::TimeZone, Timestamp};
use roombook_core::params::{
    BookingRequest, CreateRoom, EditBooking, RecommendRequest, RoomRef, ScheduleQuery, SeriesRef,
    UpdateRoom,
};
use roombook_core::{
    BookingReport, CancelReport, CreateResult, DeleteResult, Reservations, Rooms, Schedule,
    Scheduler, UpdateResult,
};
use uuid::Uuid;

use crate::renderer::TerminalRenderer;

/// Parses an RFC 3339 instant, e.g. `2025-10-28T09:00:00Z`.
fn parse_timestamp(value: &str) -> std::result::Result<Timestamp, String> {
    value
        .parse::<Timestamp>()
        .map_err(|e| format!("expected an RFC 3339 instant like 2025-10-28T09:00:00Z: {e}"))
}

/// Parses a civil date, e.g. `2025-10-28`.
fn parse_date(value: &str) -> std::result::Result<Date, String> {
    value
        .parse::<Date>()
        .map_err(|e| format!("expected a date like 2025-10-28: {e}"))
}

/// Parses a series identifier (UUID).
fn parse_series_id(value: &str) -> std::result::Result<Uuid, String> {
    value
        .parse::<Uuid>()
        .map_err(|e| format!("expected a series ID (UUID): {e}"))
}

/// Converts a civil date to the UTC instant at its midnight.
fn day_start(date: Date) -> Result<Timestamp> {
    Ok(date
        .to_zoned(TimeZone::UTC)
        .with_context(|| format!("date {date} is out of range"))?
        .timestamp())
}

// ============================================================================
// Room catalog commands
// ============================================================================

/// Register a new room
#[derive(Args)]
pub struct AddRoomArgs {
    /// Unique identifier for the room (e.g. a101)
    pub room_id: String,
    /// Human-readable room name
    pub name: String,
    /// Number of seats
    #[arg(short, long)]
    pub capacity: u32,
    /// Free-form equipment description
    #[arg(short, long)]
    pub equipment: Option<String>,
}

impl From<AddRoomArgs> for CreateRoom {
    fn from(val: AddRoomArgs) -> Self {
        CreateRoom {
            room_id: val.room_id,
            name: val.name,
            capacity: val.capacity,
            equipment: val.equipment,
        }
    }
}

/// Show details of a specific room
#[derive(Args)]
pub struct ShowRoomArgs {
    /// Identifier of the room to show
    pub room_id: String,
}

impl From<ShowRoomArgs> for RoomRef {
    fn from(val: ShowRoomArgs) -> Self {
        RoomRef {
            room_id: val.room_id,
        }
    }
}

/// Update a room's name, capacity, or equipment
///
/// Absent flags leave the corresponding field unchanged. The room identity
/// itself cannot change.
#[derive(Args)]
pub struct UpdateRoomArgs {
    /// Identifier of the room to update
    pub room_id: String,
    /// New room name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New seat count
    #[arg(short, long)]
    pub capacity: Option<u32>,
    /// New equipment description
    #[arg(short, long)]
    pub equipment: Option<String>,
}

impl From<UpdateRoomArgs> for UpdateRoom {
    fn from(val: UpdateRoomArgs) -> Self {
        UpdateRoom {
            room_id: val.room_id,
            name: val.name,
            capacity: val.capacity,
            equipment: val.equipment,
        }
    }
}

/// Remove a room from the catalog
///
/// Refused while any reservation still references the room.
#[derive(Args)]
pub struct RemoveRoomArgs {
    /// Identifier of the room to remove
    pub room_id: String,
}

impl From<RemoveRoomArgs> for RoomRef {
    fn from(val: RemoveRoomArgs) -> Self {
        RoomRef {
            room_id: val.room_id,
        }
    }
}

#[derive(Subcommand)]
pub enum RoomCommands {
    /// Register a new room
    #[command(alias = "a")]
    Add(AddRoomArgs),
    /// List all rooms
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific room
    #[command(alias = "s")]
    Show(ShowRoomArgs),
    /// Update a room's name, capacity, or equipment
    #[command(alias = "u")]
    Update(UpdateRoomArgs),
    /// Remove a room from the catalog
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveRoomArgs),
}

// ============================================================================
// Booking commands
// ============================================================================

/// Book a reservation series
///
/// With --room the booking targets that room; without it the top
/// recommendation for the student count and time window is used. The series
/// repeats weekly at the same time for --weeks weeks.
#[derive(Args)]
pub struct BookArgs {
    /// First-week start instant (RFC 3339, e.g. 2025-10-28T09:00:00Z)
    #[arg(value_parser = parse_timestamp)]
    pub start: Timestamp,
    /// First-week end instant (exclusive)
    #[arg(value_parser = parse_timestamp)]
    pub end: Timestamp,
    /// Target room; omit to pick the top recommendation
    #[arg(short, long)]
    pub room: Option<String>,
    /// Number of weekly occurrences, including the first
    #[arg(short, long, default_value_t = 1)]
    pub weeks: u32,
    /// Purpose label for the booking
    #[arg(short, long)]
    pub competency: String,
    /// Number of students
    #[arg(short, long)]
    pub students: u32,
}

impl From<BookArgs> for BookingRequest {
    fn from(val: BookArgs) -> Self {
        BookingRequest {
            room_id: val.room,
            time_start: val.start,
            time_end: val.end,
            repeat: val.weeks,
            competency: val.competency,
            students: val.students,
        }
    }
}

/// Replace an existing reservation series
///
/// The series keeps its identifier; every occurrence is replaced by the new
/// weekly expansion. The conflict check ignores the series' own rows, so
/// shifting a booking within its old time is fine.
#[derive(Args)]
pub struct EditArgs {
    /// Identifier of the series to replace
    #[arg(value_parser = parse_series_id)]
    pub series_id: Uuid,
    /// First-week start instant (RFC 3339)
    #[arg(value_parser = parse_timestamp)]
    pub start: Timestamp,
    /// First-week end instant (exclusive)
    #[arg(value_parser = parse_timestamp)]
    pub end: Timestamp,
    /// Target room; omit to pick the top recommendation
    #[arg(short, long)]
    pub room: Option<String>,
    /// Number of weekly occurrences, including the first
    #[arg(short, long, default_value_t = 1)]
    pub weeks: u32,
    /// Purpose label for the booking
    #[arg(short, long)]
    pub competency: String,
    /// Number of students
    #[arg(short, long)]
    pub students: u32,
}

impl From<EditArgs> for EditBooking {
    fn from(val: EditArgs) -> Self {
        EditBooking {
            series_id: val.series_id,
            booking: BookingRequest {
                room_id: val.room,
                time_start: val.start,
                time_end: val.end,
                repeat: val.weeks,
                competency: val.competency,
                students: val.students,
            },
        }
    }
}

/// Cancel a reservation series
///
/// Removes every occurrence. Cancelling an unknown series is a no-op, not
/// an error.
#[derive(Args)]
pub struct CancelArgs {
    /// Identifier of the series to cancel
    #[arg(value_parser = parse_series_id)]
    pub series_id: Uuid,
}

impl From<CancelArgs> for SeriesRef {
    fn from(val: CancelArgs) -> Self {
        SeriesRef {
            series_id: val.series_id,
        }
    }
}

/// Show every occurrence of a series
#[derive(Args)]
pub struct ShowSeriesArgs {
    /// Identifier of the series to show
    #[arg(value_parser = parse_series_id)]
    pub series_id: Uuid,
}

impl From<ShowSeriesArgs> for SeriesRef {
    fn from(val: ShowSeriesArgs) -> Self {
        SeriesRef {
            series_id: val.series_id,
        }
    }
}

/// Recommend rooms for a capacity need
///
/// Lists rooms that seat the requested number of students and are free for
/// every weekly occurrence of the window.
#[derive(Args)]
pub struct RecommendArgs {
    /// First-week start instant (RFC 3339)
    #[arg(value_parser = parse_timestamp)]
    pub start: Timestamp,
    /// First-week end instant (exclusive)
    #[arg(value_parser = parse_timestamp)]
    pub end: Timestamp,
    /// Number of weekly occurrences, including the first
    #[arg(short, long, default_value_t = 1)]
    pub weeks: u32,
    /// Number of students to seat
    #[arg(short, long)]
    pub students: u32,
}

impl From<RecommendArgs> for RecommendRequest {
    fn from(val: RecommendArgs) -> Self {
        RecommendRequest {
            time_start: val.start,
            time_end: val.end,
            repeat: val.weeks,
            students: val.students,
        }
    }
}

// ============================================================================
// Schedule commands
// ============================================================================

/// Show the schedule for a date range
#[derive(Args)]
pub struct ScheduleArgs {
    /// First day of the range (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub from: Date,
    /// Last day of the range, inclusive (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub to: Date,
    /// Restrict to a single room
    #[arg(short, long)]
    pub room: Option<String>,
    /// Restrict to a single competency label
    #[arg(short, long)]
    pub competency: Option<String>,
    /// Print the rows as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Export a date-range schedule as CSV
#[derive(Args)]
pub struct ExportArgs {
    /// First day of the range (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub from: Date,
    /// Last day of the range, inclusive (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub to: Date,
    /// Restrict to a single room
    #[arg(short, long)]
    pub room: Option<String>,
    /// Restrict to a single competency label
    #[arg(short, long)]
    pub competency: Option<String>,
    /// Write the CSV to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

/// Builds the half-open core query for an inclusive civil-date range.
fn schedule_query(
    from: Date,
    to: Date,
    room: Option<String>,
    competency: Option<String>,
) -> Result<ScheduleQuery> {
    let end = to.tomorrow().with_context(|| format!("date {to} is out of range"))?;
    Ok(ScheduleQuery {
        from: day_start(from)?,
        to: day_start(end)?,
        room_id: room,
        competency,
    })
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs parsed commands against the scheduler and renders the results.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    /// Dispatch a room catalog command.
    pub async fn handle_room_command(&self, command: RoomCommands) -> Result<()> {
        match command {
            RoomCommands::Add(args) => {
                let room = self.scheduler.create_room(&args.into()).await?;
                self.renderer.render(&CreateResult::new(room).to_string())
            }
            RoomCommands::List => self.list_rooms().await,
            RoomCommands::Show(args) => {
                let params: RoomRef = args.into();
                match self.scheduler.get_room(&params).await? {
                    Some(room) => self.renderer.render(&room.to_string()),
                    None => self
                        .renderer
                        .render(&format!("Room '{}' not found.\n", params.room_id)),
                }
            }
            RoomCommands::Update(args) => {
                let room = self.scheduler.update_room(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(room).to_string())
            }
            RoomCommands::Remove(args) => {
                let room = self.scheduler.delete_room(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(room).to_string())
            }
        }
    }

    /// List the room catalog.
    pub async fn list_rooms(&self) -> Result<()> {
        let rooms = self.scheduler.list_rooms().await?;
        self.renderer.render(&Rooms(rooms).to_string())
    }

    /// Book a new reservation series.
    pub async fn book(&self, args: BookArgs) -> Result<()> {
        let outcome = self.scheduler.add_booking(&args.into()).await?;
        self.renderer.render(&BookingReport(outcome).to_string())
    }

    /// Replace an existing reservation series.
    pub async fn edit(&self, args: EditArgs) -> Result<()> {
        let outcome = self.scheduler.edit_booking(&args.into()).await?;
        self.renderer.render(&BookingReport(outcome).to_string())
    }

    /// Cancel a reservation series.
    pub async fn cancel(&self, args: CancelArgs) -> Result<()> {
        let params: SeriesRef = args.into();
        let deleted = self.scheduler.cancel_booking(&params).await?;
        self.renderer.render(
            &CancelReport {
                series_id: params.series_id,
                deleted,
            }
            .to_string(),
        )
    }

    /// Show every occurrence of a series.
    pub async fn show_series(&self, args: ShowSeriesArgs) -> Result<()> {
        let reservations = self.scheduler.get_series(&args.into()).await?;
        self.renderer.render(&Reservations(reservations).to_string())
    }

    /// Recommend rooms for a capacity need.
    pub async fn recommend(&self, args: RecommendArgs) -> Result<()> {
        let rooms = self.scheduler.recommend_rooms(&args.into()).await?;
        self.renderer.render(&Rooms(rooms).to_string())
    }

    /// Show the schedule for a date range.
    pub async fn schedule(&self, args: ScheduleArgs) -> Result<()> {
        let query = schedule_query(args.from, args.to, args.room, args.competency)?;
        let rows = self.scheduler.schedule(&query).await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        } else {
            self.renderer.render(&Schedule(rows).to_string())
        }
    }

    /// Export a date-range schedule as CSV.
    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let query = schedule_query(args.from, args.to, args.room, args.competency)?;
        let csv = self.scheduler.export_schedule(&query).await?;

        match args.output {
            Some(path) => {
                std::fs::write(&path, csv.to_string())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                self.renderer.render(&format!(
                    "Exported {} reservation(s) to {}\n",
                    csv.len(),
                    path.display()
                ))
            }
            None => {
                // CSV goes to stdout untouched; markdown rendering would
                // mangle it.
                print!("{csv}");
                Ok(())
            }
        }
    }
}
