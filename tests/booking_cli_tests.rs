//! End-to-end CLI tests: init, seed, availability, booking and conflicts.
//! Fixture dates live far in the future so the today-filter never trips.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bb, book_fixture, first_booking_id, init_seeded_db, setup_test_db};

// 2030-03-05 is a Tuesday: Leon works 09:00-17:00 with a 12:00-12:30 break.

#[test]
fn init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    bb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    bb().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn seed_loads_catalog() {
    let db_path = setup_test_db("seed_catalog");
    init_seeded_db(&db_path);

    bb().args(["--db", &db_path, "services"])
        .assert()
        .success()
        .stdout(contains("signature-cut"))
        .stdout(contains("Signature Cut"))
        .stdout(contains("$65"))
        .stdout(contains("scalp-massage"));

    bb().args(["--db", &db_path, "stylists"])
        .assert()
        .success()
        .stdout(contains("Leon Chambers"))
        .stdout(contains("Master Barber"))
        .stdout(contains("09:00-17:00"))
        .stdout(contains("break 12:00-12:30"));
}

#[test]
fn slots_respect_breaks() {
    let db_path = setup_test_db("slots_breaks");
    init_seeded_db(&db_path);

    // 45-minute Signature Cut on a Tuesday: 11:30 would run into the
    // 12:00-12:30 break; 11:15 ends exactly at 12:00 and stays.
    bb().args([
        "--db",
        &db_path,
        "slots",
        "2030-03-05",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
    ])
    .assert()
    .success()
    .stdout(contains("09:00"))
    .stdout(contains("11:15"))
    .stdout(contains("12:30"))
    .stdout(contains("11:30").not())
    .stdout(contains("12:15").not());
}

#[test]
fn slots_for_an_off_day_report_no_availability() {
    let db_path = setup_test_db("slots_off_day");
    init_seeded_db(&db_path);

    // 2030-03-04 is a Monday; Leon is off.
    bb().args([
        "--db",
        &db_path,
        "slots",
        "2030-03-04",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
    ])
    .assert()
    .success()
    .stdout(contains("does not work on Mondays"));
}

#[test]
fn add_ons_stretch_the_requested_duration() {
    let db_path = setup_test_db("slots_add_on");
    init_seeded_db(&db_path);

    // 45 + 15 minutes: the last slot in Leon's 09:00-17:00 Tuesday moves
    // from 16:15 back to 16:00.
    bb().args([
        "--db",
        &db_path,
        "slots",
        "2030-03-05",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--add-on",
        "scalp-massage",
    ])
    .assert()
    .success()
    .stdout(contains("1h"))
    .stdout(contains("16:00"))
    .stdout(contains("16:15").not());
}

#[test]
fn booking_confirms_and_blocks_the_slot() {
    let db_path = setup_test_db("book_conflict");
    init_seeded_db(&db_path);

    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:00",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Casey Morgan",
        "--email",
        "casey@example.com",
        "--phone",
        "+1 587-555-0101",
        "--notes",
        "First visit",
        "--marketing",
    ])
    .assert()
    .success()
    .stdout(contains("Booking confirmed"))
    .stdout(contains("BRG-"));

    // The booked range 09:00-09:45 disappears from availability.
    bb().args([
        "--db",
        &db_path,
        "slots",
        "2030-03-05",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
    ])
    .assert()
    .success()
    .stdout(contains("09:00 ").not())
    .stdout(contains("09:45"));

    // A second claim on the same slot is rejected with a conflict.
    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:00",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Jordan Lee",
        "--email",
        "jordan@example.com",
        "--phone",
        "+1 403-555-0101",
    ])
    .assert()
    .failure()
    .stderr(contains("no longer available"));

    // Overlapping (not identical) start times are rejected too.
    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:30",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Jordan Lee",
        "--email",
        "jordan@example.com",
        "--phone",
        "+1 403-555-0101",
    ])
    .assert()
    .failure()
    .stderr(contains("no longer available"));
}

#[test]
fn touching_bookings_are_allowed() {
    let db_path = setup_test_db("book_touching");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");

    // 09:45 starts exactly where the 45-minute booking ends.
    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:45",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Jordan Lee",
        "--email",
        "jordan@example.com",
        "--phone",
        "+1 403-555-0101",
    ])
    .assert()
    .success()
    .stdout(contains("Booking confirmed"));
}

#[test]
fn booking_an_off_grid_time_is_rejected() {
    let db_path = setup_test_db("book_off_grid");
    init_seeded_db(&db_path);

    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:10",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Casey Morgan",
        "--email",
        "casey@example.com",
        "--phone",
        "+1 587-555-0101",
    ])
    .assert()
    .failure()
    .stderr(contains("no longer available"));
}

#[test]
fn booking_an_off_day_is_rejected() {
    let db_path = setup_test_db("book_off_day");
    init_seeded_db(&db_path);

    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-04",
        "09:00",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Casey Morgan",
        "--email",
        "casey@example.com",
        "--phone",
        "+1 587-555-0101",
    ])
    .assert()
    .failure()
    .stderr(contains("does not work on 2030-03-04"));
}

#[test]
fn invalid_client_details_are_rejected_before_submission() {
    let db_path = setup_test_db("book_bad_client");
    init_seeded_db(&db_path);

    bb().args([
        "--db",
        &db_path,
        "book",
        "2030-03-05",
        "09:00",
        "--stylist",
        "leon",
        "--service",
        "signature-cut",
        "--name",
        "Casey Morgan",
        "--email",
        "not-an-email",
        "--phone",
        "+1 587-555-0101",
    ])
    .assert()
    .failure()
    .stderr(contains("valid email"));

    // Nothing was written.
    bb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No bookings found"));
}

#[test]
fn list_and_cancel_round_trip() {
    let db_path = setup_test_db("list_cancel");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "10:00");
    book_fixture(&db_path, "2030-03-06", "09:30");

    bb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2030-03-05"))
        .stdout(contains("2030-03-06"))
        .stdout(contains("Casey Morgan"))
        .stdout(contains("2 bookings"));

    bb().args(["--db", &db_path, "list", "--date", "2030-03-05"])
        .assert()
        .success()
        .stdout(contains("2030-03-05"))
        .stdout(contains("2030-03-06").not());

    let id = first_booking_id(&db_path);

    bb().args(["--db", &db_path, "cancel", &id])
        .assert()
        .success()
        .stdout(contains("cancelled"));

    bb().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("1 bookings"));

    bb().args(["--db", &db_path, "cancel", "missing-id"])
        .assert()
        .failure()
        .stderr(contains("Unknown booking"));
}

#[test]
fn split_shifts_produce_two_slot_runs() {
    let db_path = setup_test_db("split_shift");
    init_seeded_db(&db_path);

    // 2030-03-09 is a Saturday: Maya works 09:00-12:00 and 14:00-18:00.
    bb().args([
        "--db",
        &db_path,
        "slots",
        "2030-03-09",
        "--stylist",
        "maya",
        "--service",
        "signature-cut",
    ])
    .assert()
    .success()
    .stdout(contains("09:00"))
    .stdout(contains("11:15"))
    .stdout(contains("14:00"))
    .stdout(contains("12:00 ").not())
    .stdout(contains("13:").not());
}

#[test]
fn audit_log_records_booking_lifecycle() {
    let db_path = setup_test_db("audit_log");
    init_seeded_db(&db_path);

    book_fixture(&db_path, "2030-03-05", "09:00");

    bb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("seed"))
        .stdout(contains("booking_attempt"))
        .stdout(contains("booking_success"));
}
