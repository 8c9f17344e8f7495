use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rpc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rpc("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_cycle_through_the_cli() {
    let name = "cli_cycle";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success()
        .stdout(contains("ENTRY recorded at"))
        .stdout(contains("BREAK (START)"));

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success()
        .stdout(contains("BREAK (START) recorded at"));

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success()
        .stdout(contains("BREAK (END) recorded at"));

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success()
        .stdout(contains("EXIT recorded at"));

    rpc(name)
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Entry"))
        .stdout(contains("Break (start)"))
        .stdout(contains("Break (end)"))
        .stdout(contains("Exit"));

    rpc(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Last punch: EXIT (MANUAL)"))
        .stdout(contains("Elapsed").not());
}

#[test]
fn test_status_shows_elapsed_for_open_session() {
    let name = "cli_status_open";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No punches recorded yet."))
        .stdout(contains("ENTRY"));

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success();

    rpc(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Elapsed: "))
        .stdout(contains("Last punch: ENTRY (MANUAL)"));
}

#[test]
fn test_list_empty_period() {
    let name = "cli_list_empty";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "list", "--period", "month"])
        .assert()
        .success()
        .stdout(contains("No records found for this period."));
}

#[test]
fn test_list_rejects_unknown_period() {
    let name = "cli_list_bad";
    let db_path = setup_test_db(name);

    rpc(name)
        .args(["--db", &db_path, "list", "--period", "decade"])
        .assert()
        .failure();
}

#[test]
fn test_schedule_save_and_print() {
    let name = "cli_schedule";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "schedule"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("17:00"));

    rpc(name)
        .args(["--db", &db_path, "schedule", "--entry", "07:30", "--exit", "16:15"])
        .assert()
        .success()
        .stdout(contains("Schedule saved."));

    rpc(name)
        .args(["--db", &db_path, "schedule", "--print"])
        .assert()
        .success()
        .stdout(contains("07:30"))
        .stdout(contains("12:00"))
        .stdout(contains("16:15"));
}

#[test]
fn test_schedule_rejects_invalid_time() {
    let name = "cli_schedule_bad";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "schedule", "--entry", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:99"));

    rpc(name)
        .args(["--db", &db_path, "schedule", "--print"])
        .assert()
        .success()
        .stdout(contains("08:00"));
}

#[test]
fn test_log_records_operations() {
    let name = "cli_log";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rpc(name)
        .args(["--db", &db_path, "punch"])
        .assert()
        .success();

    rpc(name)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"))
        .stdout(contains("punch"))
        .stdout(contains("MANUAL ENTRY"));
}

#[test]
fn test_config_print_shows_defaults() {
    let name = "cli_config";
    let db_path = setup_test_db(name);

    rpc(name)
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("tolerance_minutes: 5"))
        .stdout(contains("poll_interval_seconds: 30"))
        .stdout(contains(db_path.as_str()));
}
