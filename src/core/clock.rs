//! Clock sources. The instant (`now_ms`) is used for arithmetic, the local
//! date-time (`now`) for display and calendar lookups.

use chrono::{DateTime, Local, TimeZone};
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Settable clock. Clones share the same instant.
///
/// Test double: the binary always runs on `SystemClock`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    ms: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn at(start: DateTime<Local>) -> Self {
        Self {
            ms: Rc::new(Cell::new(start.timestamp_millis())),
        }
    }

    pub fn set(&self, at: DateTime<Local>) {
        self.ms.set(at.timestamp_millis());
    }

    pub fn advance_ms(&self, ms: i64) {
        self.ms.set(self.ms.get() + ms);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance_ms(secs * 1_000);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        Local
            .timestamp_millis_opt(self.ms.get())
            .single()
            .unwrap_or_else(Local::now)
    }

    fn now_ms(&self) -> i64 {
        self.ms.get()
    }
}
