//! CSV serialization of schedule rows.
//!
//! The export is a flat table with a fixed header; timestamps render in
//! their canonical RFC 3339 (ISO 8601) UTC form. An empty result set yields
//! the header plus a single explanatory row, so a downloaded file is never
//! silently blank.

use std::fmt;

use crate::models::ScheduleRow;

const HEADER: &str =
    "Room ID,Room Name,Capacity,Time Start,Time End,Competency,Number of Students";
const EMPTY_ROW: &str = "no reservations in the selected range,,,,,,";

/// Newtype wrapper that serializes a schedule to CSV via `Display`.
pub struct CsvSchedule(pub Vec<ScheduleRow>);

impl CsvSchedule {
    /// Check if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of exported rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CsvSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;

        if self.0.is_empty() {
            return writeln!(f, "{EMPTY_ROW}");
        }

        for row in &self.0 {
            let reservation = &row.reservation;
            writeln!(
                f,
                "{},{},{},{},{},{},{}",
                csv_field(&reservation.room_id),
                csv_field(row.room_name.as_deref().unwrap_or("")),
                row.room_capacity
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                reservation.interval.start,
                reservation.interval.end,
                csv_field(&reservation.competency),
                reservation.students
            )?;
        }

        Ok(())
    }
}

/// Quotes a field when it contains a comma, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use uuid::Uuid;

    use super::*;
    use crate::models::{Interval, Reservation};

    fn row(room_name: Option<&str>, competency: &str) -> ScheduleRow {
        ScheduleRow {
            reservation: Reservation {
                id: 1,
                series_id: Uuid::nil(),
                room_id: "a101".to_string(),
                interval: Interval {
                    start: "2025-10-28T09:00:00Z".parse::<Timestamp>().unwrap(),
                    end: "2025-10-28T10:00:00Z".parse::<Timestamp>().unwrap(),
                },
                competency: competency.to_string(),
                students: 12,
            },
            room_name: room_name.map(String::from),
            room_capacity: room_name.map(|_| 30),
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let csv = format!("{}", CsvSchedule(vec![row(Some("Lecture Hall A"), "Algebra")]));
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Room ID,Room Name,Capacity,Time Start,Time End,Competency,Number of Students"
        );
        assert_eq!(
            lines.next().unwrap(),
            "a101,Lecture Hall A,30,2025-10-28T09:00:00Z,2025-10-28T10:00:00Z,Algebra,12"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_empty_schedule_has_sentinel_row() {
        let csv = format!("{}", CsvSchedule(vec![]));
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("Room ID,"));
        assert_eq!(
            lines.next().unwrap(),
            "no reservations in the selected range,,,,,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_quotes_fields_with_commas_and_quotes() {
        let csv = format!(
            "{}",
            CsvSchedule(vec![row(Some("Hall \"B\", annex"), "Maths, advanced")])
        );
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Hall \"\"B\"\", annex\""));
        assert!(data_line.contains("\"Maths, advanced\""));
    }

    #[test]
    fn test_csv_missing_room_renders_empty_fields() {
        let csv = format!("{}", CsvSchedule(vec![row(None, "Algebra")]));
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.starts_with("a101,,,"));
    }
}
