mod common;

use common::{add_room, create_test_scheduler};
use jiff::Timestamp;
use roombook_core::params::{
    BookingRequest, ConflictProbe, EditBooking, RecommendRequest, ScheduleQuery, SeriesRef,
};
use roombook_core::{BookingOutcome, SchedulerError};
use uuid::Uuid;

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp literal")
}

fn booking(room_id: Option<&str>, start: &str, end: &str, repeat: u32) -> BookingRequest {
    BookingRequest {
        room_id: room_id.map(String::from),
        time_start: ts(start),
        time_end: ts(end),
        repeat,
        competency: "Algebra".to_string(),
        students: 5,
    }
}

/// Unwraps a booked outcome into its series ID.
fn booked_series(outcome: &BookingOutcome) -> Uuid {
    match outcome {
        BookingOutcome::Booked { series_id, .. } => *series_id,
        other => panic!("Expected a booked outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_overlapping_booking_is_rejected() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let first = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    assert!(first.is_booked());

    // 09:30–10:30 overlaps 09:30–10:00.
    let second = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:30:00Z",
            "2025-10-28T10:30:00Z",
            1,
        ))
        .await
        .expect("Failed to run booking");
    assert_eq!(second, BookingOutcome::Conflict);
}

#[tokio::test]
async fn test_adjacent_booking_is_accepted() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");

    // Starts exactly at the previous end: half-open intervals do not clash.
    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T10:00:00Z",
            "2025-10-28T11:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    assert!(outcome.is_booked());
}

#[tokio::test]
async fn test_weekly_series_books_every_week() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            3,
        ))
        .await
        .expect("Failed to book");
    let series_id = booked_series(&outcome);

    let reservations = scheduler
        .get_series(&SeriesRef { series_id })
        .await
        .expect("Failed to fetch series");
    assert_eq!(reservations.len(), 3);
    assert_eq!(reservations[0].interval.start, ts("2025-10-28T09:00:00Z"));
    assert_eq!(reservations[1].interval.start, ts("2025-11-04T09:00:00Z"));
    assert_eq!(reservations[2].interval.start, ts("2025-11-11T09:00:00Z"));

    // A week-2 clash with the series blocks another booking.
    let clash = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-11-04T09:30:00Z",
            "2025-11-04T10:30:00Z",
            1,
        ))
        .await
        .expect("Failed to run booking");
    assert_eq!(clash, BookingOutcome::Conflict);
}

#[tokio::test]
async fn test_edit_moves_every_week_of_the_series() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            3,
        ))
        .await
        .expect("Failed to book");
    let series_id = booked_series(&outcome);

    // Move the whole series an hour later under the same ID.
    let edited = scheduler
        .edit_booking(&EditBooking {
            series_id,
            booking: booking(
                Some("roomA"),
                "2025-10-28T14:00:00Z",
                "2025-10-28T15:00:00Z",
                3,
            ),
        })
        .await
        .expect("Failed to edit");
    assert_eq!(booked_series(&edited), series_id);

    // Week 2 shows only the new time.
    let week2 = scheduler
        .schedule(&ScheduleQuery {
            from: ts("2025-11-03T00:00:00Z"),
            to: ts("2025-11-10T00:00:00Z"),
            room_id: None,
            competency: None,
        })
        .await
        .expect("Failed to query schedule");
    assert_eq!(week2.len(), 1);
    assert_eq!(
        week2[0].reservation.interval.start,
        ts("2025-11-04T14:00:00Z")
    );

    // The old week-1 slot is gone.
    let old_week1 = scheduler
        .schedule(&ScheduleQuery {
            from: ts("2025-10-28T09:00:00Z"),
            to: ts("2025-10-28T10:00:00Z"),
            room_id: None,
            competency: None,
        })
        .await
        .expect("Failed to query schedule");
    assert!(old_week1.is_empty());
}

#[tokio::test]
async fn test_edit_unknown_series_fails() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let err = scheduler
        .edit_booking(&EditBooking {
            series_id: Uuid::new_v4(),
            booking: booking(
                Some("roomA"),
                "2025-10-28T09:00:00Z",
                "2025-10-28T10:00:00Z",
                1,
            ),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::SeriesNotFound { .. }));
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            2,
        ))
        .await
        .expect("Failed to book");
    let series_id = booked_series(&outcome);

    let first = scheduler
        .cancel_booking(&SeriesRef { series_id })
        .await
        .expect("Failed to cancel");
    assert_eq!(first, 2);

    let second = scheduler
        .cancel_booking(&SeriesRef { series_id })
        .await
        .expect("Second cancel must succeed");
    assert_eq!(second, 0);
}

#[tokio::test]
async fn test_add_then_schedule_round_trip() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let request = BookingRequest {
        room_id: Some("roomA".to_string()),
        time_start: ts("2025-10-28T09:00:00Z"),
        time_end: ts("2025-10-28T10:30:00Z"),
        repeat: 1,
        competency: "Numerical Methods".to_string(),
        students: 8,
    };
    let outcome = scheduler.add_booking(&request).await.expect("book");
    let series_id = booked_series(&outcome);

    let rows = scheduler
        .schedule(&ScheduleQuery {
            from: ts("2025-10-28T00:00:00Z"),
            to: ts("2025-10-29T00:00:00Z"),
            room_id: None,
            competency: None,
        })
        .await
        .expect("Failed to query schedule");
    assert_eq!(rows.len(), 1);

    let stored = &rows[0].reservation;
    assert_eq!(stored.series_id, series_id);
    assert_eq!(stored.room_id, "roomA");
    assert_eq!(stored.interval.start, request.time_start);
    assert_eq!(stored.interval.end, request.time_end);
    assert_eq!(stored.competency, request.competency);
    assert_eq!(stored.students, request.students);
    assert_eq!(rows[0].room_name, Some("Room roomA".to_string()));
}

#[tokio::test]
async fn test_recommend_filters_capacity_and_availability() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "small", 10).await;
    add_room(&scheduler, "busy", 30).await;
    add_room(&scheduler, "free", 30).await;

    // Occupy "busy" in week 2 only: still disqualifies the whole window.
    let outcome = scheduler
        .add_booking(&booking(
            Some("busy"),
            "2025-11-04T09:00:00Z",
            "2025-11-04T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    assert!(outcome.is_booked());

    let rooms = scheduler
        .recommend_rooms(&RecommendRequest {
            time_start: ts("2025-10-28T09:00:00Z"),
            time_end: ts("2025-10-28T10:00:00Z"),
            repeat: 2,
            students: 20,
        })
        .await
        .expect("Failed to recommend");

    let ids: Vec<&str> = rooms.iter().map(|r| r.room_id.as_str()).collect();
    assert_eq!(ids, vec!["free"]);
}

#[tokio::test]
async fn test_recommendation_is_deterministic() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "b202", 20).await;
    add_room(&scheduler, "a101", 20).await;

    let request = RecommendRequest {
        time_start: ts("2025-10-28T09:00:00Z"),
        time_end: ts("2025-10-28T10:00:00Z"),
        repeat: 1,
        students: 10,
    };

    let first = scheduler.recommend_rooms(&request).await.expect("recommend");
    let second = scheduler.recommend_rooms(&request).await.expect("recommend");
    assert_eq!(first, second);
    assert_eq!(first[0].room_id, "a101");
}

#[tokio::test]
async fn test_auto_room_resolution_picks_top_recommendation() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "b202", 20).await;
    add_room(&scheduler, "a101", 20).await;

    let outcome = scheduler
        .add_booking(&booking(
            None,
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    match outcome {
        BookingOutcome::Booked { room_id, .. } => assert_eq!(room_id, "a101"),
        other => panic!("Expected a booked outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_auto_room_resolution_reports_no_room() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "small", 3).await;

    let outcome = scheduler
        .add_booking(&booking(
            None,
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to run booking");
    assert_eq!(outcome, BookingOutcome::NoRoomAvailable);
}

#[tokio::test]
async fn test_explicit_room_must_fit_students() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "small", 3).await;

    let err = scheduler
        .add_booking(&booking(
            Some("small"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::InvalidInput { ref field, .. } if field == "students"
    ));
}

#[tokio::test]
async fn test_unknown_explicit_room_fails() {
    let (_tmp, scheduler) = create_test_scheduler().await;

    let err = scheduler
        .add_booking(&booking(
            Some("ghost"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::RoomNotFound { .. }));
}

#[tokio::test]
async fn test_zero_repeat_is_rejected_before_any_write() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let err = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            0,
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::InvalidInput { ref field, .. } if field == "repeat"
    ));
}

#[tokio::test]
async fn test_conflict_probe_excludes_own_series() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    let series_id = booked_series(&outcome);

    let probe = ConflictProbe {
        exclude_series: None,
        room_id: "roomA".to_string(),
        time_start: ts("2025-10-28T09:30:00Z"),
        time_end: ts("2025-10-28T10:30:00Z"),
        repeat: 1,
    };
    assert!(scheduler.has_conflict(&probe).await.expect("probe"));

    let excluded = ConflictProbe {
        exclude_series: Some(series_id),
        ..probe
    };
    assert!(!scheduler.has_conflict(&excluded).await.expect("probe"));
}

#[tokio::test]
async fn test_export_round_trip_and_sentinel() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let empty = scheduler
        .export_schedule(&ScheduleQuery {
            from: ts("2025-10-28T00:00:00Z"),
            to: ts("2025-10-29T00:00:00Z"),
            room_id: None,
            competency: None,
        })
        .await
        .expect("Failed to export");
    let text = format!("{empty}");
    assert!(text.starts_with("Room ID,Room Name,Capacity,"));
    assert!(text.contains("no reservations in the selected range"));

    scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");

    let export = scheduler
        .export_schedule(&ScheduleQuery {
            from: ts("2025-10-28T00:00:00Z"),
            to: ts("2025-10-29T00:00:00Z"),
            room_id: None,
            competency: None,
        })
        .await
        .expect("Failed to export");
    assert_eq!(export.len(), 1);
    let text = format!("{export}");
    assert!(text.contains("roomA,Room roomA,10,2025-10-28T09:00:00Z,2025-10-28T10:00:00Z,Algebra,5"));
}

#[tokio::test]
async fn test_room_update_and_delete_flow() {
    let (_tmp, scheduler) = create_test_scheduler().await;
    add_room(&scheduler, "roomA", 10).await;

    let updated = scheduler
        .update_room(&roombook_core::params::UpdateRoom {
            room_id: "roomA".to_string(),
            name: None,
            capacity: Some(15),
            equipment: Some("projector".to_string()),
        })
        .await
        .expect("Failed to update room");
    assert_eq!(updated.capacity, 15);
    assert_eq!(updated.equipment, Some("projector".to_string()));

    let outcome = scheduler
        .add_booking(&booking(
            Some("roomA"),
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            1,
        ))
        .await
        .expect("Failed to book");
    let series_id = booked_series(&outcome);

    let err = scheduler
        .delete_room(&roombook_core::params::RoomRef {
            room_id: "roomA".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::RoomInUse { .. }));

    scheduler
        .cancel_booking(&SeriesRef { series_id })
        .await
        .expect("Failed to cancel");

    let deleted = scheduler
        .delete_room(&roombook_core::params::RoomRef {
            room_id: "roomA".to_string(),
        })
        .await
        .expect("Failed to delete room");
    assert_eq!(deleted.room_id, "roomA");
}
