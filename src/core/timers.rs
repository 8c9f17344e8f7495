//! Cancellable periodic and one-shot jobs driven by an explicit "now".
//!
//! Nothing runs by itself: the owner asks for due jobs with `pop_due` and
//! dispatches them. Cancelling a handle guarantees its job is never delivered
//! again, even if it was already due.

/// Work a timer delivers when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Wall-clock display refresh.
    WallClock,
    /// Chronometer refresh.
    Chronometer,
    /// Automatic registration evaluation.
    AutoCheck,
    /// Re-enable automatic registration after a fire.
    AutoRearm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry {
    handle: TimerHandle,
    job: Job,
    due_ms: i64,
    period_ms: Option<i64>,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_handle: u64,
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `job` every `period_ms`, first at `now_ms + period_ms`.
    pub fn every(&mut self, now_ms: i64, period_ms: i64, job: Job) -> TimerHandle {
        let period_ms = period_ms.max(1);
        self.insert(now_ms + period_ms, Some(period_ms), job)
    }

    /// Deliver `job` once, at `now_ms + delay_ms`.
    pub fn once(&mut self, now_ms: i64, delay_ms: i64, job: Job) -> TimerHandle {
        self.insert(now_ms + delay_ms.max(0), None, job)
    }

    fn insert(&mut self, due_ms: i64, period_ms: Option<i64>, job: Job) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.entries.push(Entry {
            handle,
            job,
            due_ms,
            period_ms,
        });
        handle
    }

    /// Returns whether the handle was still active.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of active timers delivering `job`.
    pub fn count(&self, job: Job) -> usize {
        self.entries.iter().filter(|e| e.job == job).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_due(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Take the earliest job due at `now_ms`.
    ///
    /// One-shot timers are removed. Periodic timers are moved to their next
    /// due time after `now_ms`; missed periods collapse into this delivery.
    pub fn pop_due(&mut self, now_ms: i64) -> Option<(TimerHandle, Job)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.handle))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let fired = (entry.handle, entry.job);

        match entry.period_ms {
            Some(period) => {
                let behind = (now_ms - entry.due_ms) / period + 1;
                entry.due_ms += behind * period;
            }
            None => {
                self.entries.remove(idx);
            }
        }

        Some(fired)
    }
}
