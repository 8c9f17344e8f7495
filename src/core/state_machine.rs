use crate::models::punch::PunchRecord;
use crate::models::punch_kind::{Category, PunchKind};

/// The punch the ledger is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextAction {
    pub kind: PunchKind,
    pub category: Category,
}

impl NextAction {
    fn of(kind: PunchKind) -> Self {
        Self {
            kind,
            category: kind.category(),
        }
    }
}

/// Next required punch given the history so far (oldest first).
///
/// The history is trusted: whatever kind comes last decides the next one.
pub fn next_action(records: &[PunchRecord]) -> NextAction {
    match records.last() {
        None => NextAction::of(PunchKind::Entry),
        Some(last) if last.kind == PunchKind::Exit => NextAction::of(PunchKind::Entry),
        Some(last) => NextAction::of(last.kind.successor()),
    }
}
