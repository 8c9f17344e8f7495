use rpunchclock::core::clock::ManualClock;
use rpunchclock::core::session::Session;
use rpunchclock::db::initialize::{init_db, open_store};
use rpunchclock::db::pool::DbPool;
use rpunchclock::models::origin::Origin;
use rpunchclock::models::punch_kind::PunchKind;
use rpunchclock::store::{KEY_CHRONO_START, KEY_RECORDS, Store};
use rpunchclock::ui::render::RecordingSink;

mod common;
use common::{local, settings, setup_test_db};

fn memory_db() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

#[test]
fn test_sqlite_store_get_set_remove() {
    let mut pool = memory_db();

    assert_eq!(pool.get("missing").unwrap(), None);

    pool.set("k", "first").unwrap();
    assert_eq!(pool.get("k").unwrap().as_deref(), Some("first"));

    // full overwrite
    pool.set("k", "second").unwrap();
    assert_eq!(pool.get("k").unwrap().as_deref(), Some("second"));

    pool.remove("k").unwrap();
    assert_eq!(pool.get("k").unwrap(), None);

    // removing twice is harmless
    pool.remove("k").unwrap();
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = memory_db();
    init_db(&pool.conn).expect("second init");

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn test_session_survives_reopening_the_database_file() {
    let db_path = setup_test_db("store_reopen");
    let at = local(2025, 9, 3, 9, 0, 0);

    {
        let pool = open_store(&db_path).unwrap();
        let mut session = Session::open(
            pool,
            ManualClock::at(at),
            RecordingSink::new(),
            settings(false),
        );
        session.punch(Origin::Manual);
        session.punch(Origin::Manual);
    }

    let pool = open_store(&db_path).unwrap();
    assert!(pool.get(KEY_RECORDS).unwrap().is_some());
    assert_eq!(
        pool.get(KEY_CHRONO_START).unwrap(),
        Some(at.timestamp_millis().to_string())
    );

    let session = Session::open(
        pool,
        ManualClock::at(local(2025, 9, 3, 12, 0, 0)),
        RecordingSink::new(),
        settings(false),
    );
    assert_eq!(session.ledger().len(), 2);
    assert_eq!(session.ledger().records()[0].kind, PunchKind::Entry);
    assert_eq!(session.ledger().records()[1].kind, PunchKind::BreakStart);
    assert_eq!(session.next_action().kind, PunchKind::BreakEnd);
}

#[test]
fn test_punches_are_logged_in_the_log_table() {
    let db_path = setup_test_db("store_punch_log");
    {
        let pool = open_store(&db_path).unwrap();
        let mut session = Session::open(
            pool,
            ManualClock::at(local(2025, 9, 3, 9, 0, 0)),
            RecordingSink::new(),
            settings(false),
        );
        session.punch(Origin::Manual);
    }

    let pool = open_store(&db_path).unwrap();
    let (target, message): (String, String) = pool
        .conn
        .query_row(
            "SELECT target, message FROM log WHERE operation = 'punch' ORDER BY id DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(target, "ENTRY");
    assert!(message.contains("03/09/2025 09:00:00"));
}
