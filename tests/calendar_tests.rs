use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dc, dc_db, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_agenda_default_range() {
    let db_path = setup_test_db("agenda_default");
    init_db_with_data(&db_path);

    // today 2025-06-01, default window of 30 days
    dc_db(&db_path)
        .arg("agenda")
        .assert()
        .success()
        .stdout(contains("Agenda 01/06/2025 → 01/07/2025"))
        .stdout(contains("10/06/2025"))
        .stdout(contains("Martin - Anniversaire de mariage"))
        .stdout(contains("15/06/2025"))
        .stdout(contains("Marie Dupont - Anniversaire"))
        .stdout(contains("Durand").not())
        .stdout(contains("Bernard").not());
}

#[test]
fn test_agenda_custom_range() {
    let db_path = setup_test_db("agenda_custom");
    init_db_with_data(&db_path);

    dc_db(&db_path)
        .args(["agenda", "--from", "2025-08-01", "--to", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("20/08/2025"))
        .stdout(contains("Durand - Mémorial"))
        .stdout(contains("Dupont").not());
}

#[test]
fn test_agenda_rejects_empty_range() {
    let db_path = setup_test_db("agenda_empty_range");
    init_db(&db_path);

    dc_db(&db_path)
        .args(["agenda", "--from", "2025-08-01", "--to", "2025-08-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_saint_of_a_given_day() {
    dc().args(["saint", "--date", "2025-08-20"])
        .assert()
        .success()
        .stdout(contains("20/08/2025 : Bernard"));

    dc().args(["--today", "2025-06-01", "saint"])
        .assert()
        .success()
        .stdout(contains("Justin"));
}

#[test]
fn test_holiday_lookup() {
    dc().args(["holiday", "--date", "14/07/2025"])
        .assert()
        .success()
        .stdout(contains("Fête Nationale"));

    dc().args(["holiday", "--date", "2025-04-21"])
        .assert()
        .success()
        .stdout(contains("Lundi de Pâques"));

    dc().args(["holiday", "--date", "2025-06-03"])
        .assert()
        .success()
        .stdout(contains("Aucun jour férié"));
}

#[test]
fn test_holidays_of_year() {
    dc().args(["holiday", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("01/04/2024"))
        .stdout(contains("09/05/2024"))
        .stdout(contains("20/05/2024"))
        .stdout(contains("25/12/2024"));
}
