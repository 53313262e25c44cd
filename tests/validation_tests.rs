use predicates::str::contains;

mod common;
use common::{dc_db, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_add_rejects_impossible_date() {
    let db_path = setup_test_db("reject_impossible_date");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["add", "birthday", "--name", "Dupont", "--date", "29/02/2023"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for 'date': invalid_date_format"));
}

#[test]
fn test_add_rejects_iso_date_for_events() {
    let db_path = setup_test_db("reject_iso_date");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["add", "promotion", "--name", "Dupont", "--date", "2020-01-15"])
        .assert()
        .failure()
        .stderr(contains("invalid_date_format"));
}

#[test]
fn test_add_memorial_death_before_birth() {
    let db_path = setup_test_db("death_before_birth");
    init_db(&db_path);

    dc_db(&db_path)
        .args([
            "add",
            "memorial",
            "--name",
            "Durand",
            "--date",
            "20/08/1930",
            "--death-date",
            "01/01/1920",
        ])
        .assert()
        .failure()
        .stderr(contains("death_before_birth"));
}

#[test]
fn test_add_memorial_bad_death_date() {
    let db_path = setup_test_db("bad_death_date");
    init_db(&db_path);

    dc_db(&db_path)
        .args([
            "add",
            "memorial",
            "--name",
            "Durand",
            "--date",
            "20/08/1930",
            "--death-date",
            "5/3/2010",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid_memorial_date"));
}

#[test]
fn test_add_retirement_requires_start_date() {
    let db_path = setup_test_db("retirement_start_required");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["add", "retirement", "--name", "Bernard"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for 'start_date'"));
}

#[test]
fn test_add_unknown_type_is_rejected_by_parser() {
    let db_path = setup_test_db("unknown_type");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["add", "wedding", "--name", "Dupont", "--date", "01/01/2000"])
        .assert()
        .failure();
}

#[test]
fn test_edit_with_invalid_date_keeps_event() {
    let db_path = setup_test_db("edit_invalid_date");
    init_db_with_data(&db_path);

    dc_db(&db_path)
        .args(["edit", "1", "--date", "31/04/1990"])
        .assert()
        .failure()
        .stderr(contains("invalid_date_format"));

    dc_db(&db_path)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(contains("15/06/1990"));
}

#[test]
fn test_missing_id_is_reported() {
    let db_path = setup_test_db("missing_id");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["edit", "42", "--name", "X"])
        .assert()
        .failure()
        .stderr(contains("No event with id 42"));

    dc_db(&db_path)
        .args(["del", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No event with id 42"));
}

#[test]
fn test_invalid_today_flag() {
    let db_path = setup_test_db("invalid_today");
    init_db(&db_path);

    common::dc()
        .args(["--db", &db_path, "--today", "demain", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: demain"));
}
