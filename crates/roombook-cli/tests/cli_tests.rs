use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn rb_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rb").expect("Failed to find rb binary");
    cmd.arg("--no-color");
    cmd
}

/// Registers a test room with the given ID and capacity.
fn add_room(db_arg: &str, room_id: &str, capacity: &str) {
    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "room",
            "add",
            room_id,
            &format!("Room {room_id}"),
            "--capacity",
            capacity,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_add_room_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    rb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "room",
            "add",
            "a101",
            "Lecture Hall A",
            "--capacity",
            "30",
            "--equipment",
            "projector",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered room with ID: a101"))
        .stdout(predicate::str::contains("Lecture Hall A"))
        .stdout(predicate::str::contains("30 seats"));
}

#[test]
fn test_cli_list_empty_rooms() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    rb_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "room", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No rooms found."));
}

#[test]
fn test_cli_book_and_schedule() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_room(db_arg, "a101", "30");

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            "--room",
            "a101",
            "--competency",
            "Algebra",
            "--students",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked series"))
        .stdout(predicate::str::contains("room a101"));

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "--from",
            "2025-10-28",
            "--to",
            "2025-10-28",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra"))
        .stdout(predicate::str::contains("12 students"));
}

#[test]
fn test_cli_overlapping_booking_is_reported() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_room(db_arg, "a101", "30");

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            "--room",
            "a101",
            "--competency",
            "Algebra",
            "--students",
            "12",
        ])
        .assert()
        .success();

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "2025-10-28T09:30:00Z",
            "2025-10-28T10:30:00Z",
            "--room",
            "a101",
            "--competency",
            "Physics",
            "--students",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "overlaps an existing reservation",
        ));
}

#[test]
fn test_cli_recommend_excludes_small_and_busy_rooms() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_room(db_arg, "small", "5");
    add_room(db_arg, "busy", "30");
    add_room(db_arg, "free", "30");

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            "--room",
            "busy",
            "--competency",
            "Algebra",
            "--students",
            "12",
        ])
        .assert()
        .success();

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "recommend",
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            "--students",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("free"))
        .stdout(predicate::str::contains("small").not())
        .stdout(predicate::str::contains("busy").not());
}

#[test]
fn test_cli_export_csv() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_room(db_arg, "a101", "30");

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "book",
            "2025-10-28T09:00:00Z",
            "2025-10-28T10:00:00Z",
            "--room",
            "a101",
            "--competency",
            "Algebra",
            "--students",
            "12",
        ])
        .assert()
        .success();

    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "export",
            "--from",
            "2025-10-28",
            "--to",
            "2025-10-28",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Room ID,Room Name,Capacity,Time Start,Time End,Competency,Number of Students",
        ))
        .stdout(predicate::str::contains(
            "a101,Room a101,30,2025-10-28T09:00:00Z,2025-10-28T10:00:00Z,Algebra,12",
        ));
}

#[test]
fn test_cli_export_empty_range_has_sentinel_row() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    rb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "export",
            "--from",
            "2025-10-28",
            "--to",
            "2025-10-28",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no reservations in the selected range",
        ));
}

#[test]
fn test_cli_cancel_is_idempotent() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    // Cancelling a series that never existed still succeeds.
    rb_cmd()
        .args([
            "--database-file",
            db_arg,
            "cancel",
            "00000000-0000-0000-0000-000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no reservations to cancel"));
}

#[test]
fn test_cli_rejects_invalid_timestamp() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    rb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "book",
            "not-a-time",
            "2025-10-28T10:00:00Z",
            "--competency",
            "Algebra",
            "--students",
            "12",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RFC 3339"));
}
