use rpunchclock::core::ledger::Ledger;
use rpunchclock::core::state_machine::next_action;
use rpunchclock::models::origin::Origin;
use rpunchclock::models::punch::PunchRecord;
use rpunchclock::models::punch_kind::{Category, PunchKind};
use rpunchclock::store::memory::MemoryStore;

mod common;
use common::local;

fn record(id: i64, kind: PunchKind) -> PunchRecord {
    PunchRecord::new(id, local(2025, 9, 3, 9, 0, 0), kind, Origin::Manual)
}

#[test]
fn test_empty_ledger_expects_entry() {
    let next = next_action(&[]);
    assert_eq!(next.kind, PunchKind::Entry);
    assert_eq!(next.category, Category::Entry);
}

#[test]
fn test_next_action_cycles_through_the_four_kinds() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new();
    let start = local(2025, 9, 3, 8, 0, 0);

    for i in 0..12 {
        let expected = PunchKind::CYCLE[i % 4];
        assert_eq!(ledger.next_action().kind, expected, "step {}", i);

        let at = start + chrono::Duration::minutes(i as i64);
        let punch = ledger.record(&mut store, at, Origin::Manual);
        assert_eq!(punch.record.kind, expected);
    }
}

#[test]
fn test_exit_restarts_the_cycle() {
    let records = vec![
        record(1, PunchKind::Entry),
        record(2, PunchKind::BreakStart),
        record(3, PunchKind::BreakEnd),
        record(4, PunchKind::Exit),
    ];
    assert_eq!(next_action(&records).kind, PunchKind::Entry);
}

#[test]
fn test_categories() {
    assert_eq!(PunchKind::Entry.category(), Category::Entry);
    assert_eq!(PunchKind::BreakStart.category(), Category::Pause);
    assert_eq!(PunchKind::BreakEnd.category(), Category::Pause);
    assert_eq!(PunchKind::Exit.category(), Category::Exit);

    let next = next_action(&[record(1, PunchKind::Entry)]);
    assert_eq!(next.kind, PunchKind::BreakStart);
    assert_eq!(next.category, Category::Pause);
}

#[test]
fn test_out_of_order_history_still_yields_a_well_defined_next_kind() {
    // two entries in a row: only the last kind matters
    let records = vec![record(1, PunchKind::Entry), record(2, PunchKind::BreakEnd)];
    assert_eq!(next_action(&records).kind, PunchKind::Exit);

    let records = vec![record(1, PunchKind::BreakStart)];
    assert_eq!(next_action(&records).kind, PunchKind::BreakEnd);
}
