//! Append-only punch history and its persisted form.

use crate::core::state_machine::{NextAction, next_action};
use crate::errors::{AppError, AppResult};
use crate::models::origin::Origin;
use crate::models::period::Period;
use crate::models::punch::PunchRecord;
use crate::store::{KEY_RECORDS, Store};
use chrono::{DateTime, Local, NaiveDate};

/// Result of a punch: the new record, plus the persistence error if the
/// write did not go through.
#[derive(Debug)]
pub struct Punch {
    pub record: PunchRecord,
    pub persist_error: Option<AppError>,
}

impl Punch {
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<PunchRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PunchRecord>) -> Self {
        Self { records }
    }

    /// Read the ledger blob. A missing blob is an empty ledger.
    pub fn load(store: &dyn Store) -> AppResult<Self> {
        match store.get(KEY_RECORDS)? {
            Some(blob) => Ok(Self {
                records: serde_json::from_str(&blob)?,
            }),
            None => Ok(Self::new()),
        }
    }

    /// Overwrite the persisted blob with the full in-memory sequence.
    pub fn persist(&self, store: &mut dyn Store) -> AppResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        store.set(KEY_RECORDS, &blob)
    }

    pub fn next_action(&self) -> NextAction {
        next_action(&self.records)
    }

    /// Append the next punch in the cycle and persist the whole ledger.
    /// The record is kept in memory even when persisting fails.
    pub fn record(&mut self, store: &mut dyn Store, at: DateTime<Local>, origin: Origin) -> Punch {
        let kind = self.next_action().kind;
        let record = PunchRecord::new(self.next_id(at.timestamp_millis()), at, kind, origin);

        self.records.push(record.clone());
        let persist_error = self.persist(store).err();

        Punch {
            record,
            persist_error,
        }
    }

    fn next_id(&self, candidate: i64) -> i64 {
        match self.records.last() {
            Some(last) if last.id >= candidate => last.id + 1,
            _ => candidate,
        }
    }

    pub fn last(&self) -> Option<&PunchRecord> {
        self.records.last()
    }

    /// Stored order: oldest first.
    pub fn records(&self) -> &[PunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Matching records, most recent first.
    pub fn filter<F>(&self, predicate: F) -> Vec<PunchRecord>
    where
        F: Fn(&PunchRecord) -> bool,
    {
        self.records
            .iter()
            .rev()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    pub fn by_period(&self, period: Period, today: NaiveDate) -> Vec<PunchRecord> {
        self.filter(|r| period.contains(r.date, today))
    }
}
