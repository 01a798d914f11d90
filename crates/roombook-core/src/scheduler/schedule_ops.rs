//! Range-bounded schedule reads and CSV export.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    display::CsvSchedule,
    error::{Result, SchedulerError},
    models::ScheduleRow,
    params::ScheduleQuery,
};

impl Scheduler {
    /// Reads the schedule for a half-open time range, joined with room
    /// metadata, ordered by start time.
    ///
    /// Optional room and competency filters narrow the result. A dangling
    /// room reference produces empty room fields and a warning, never a
    /// failure.
    pub async fn schedule(&self, params: &ScheduleQuery) -> Result<Vec<ScheduleRow>> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.schedule_rows(&params)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reads the schedule and wraps it for CSV serialization.
    ///
    /// The wrapper renders the fixed header and one row per reservation; an
    /// empty range renders the header plus a single explanatory row.
    pub async fn export_schedule(&self, params: &ScheduleQuery) -> Result<CsvSchedule> {
        let rows = self.schedule(params).await?;
        Ok(CsvSchedule(rows))
    }
}
