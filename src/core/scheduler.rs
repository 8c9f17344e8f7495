//! Automatic ENTRY/EXIT registration around the configured times.

use crate::core::state_machine::NextAction;
use crate::core::timers::{Job, TimerHandle, Timers};
use crate::models::punch_kind::PunchKind;
use crate::models::schedule::ScheduleConfig;
use chrono::{DateTime, Local, NaiveTime};

/// Whether `now` lies within `tolerance_ms` (inclusive) of today's `target`.
/// A missing target, or one that does not exist on today's local calendar,
/// never matches. In the repeated hour of a DST change the earlier instant
/// is used.
pub fn within_window(target: Option<NaiveTime>, now: DateTime<Local>, tolerance_ms: i64) -> bool {
    let Some(target) = target else {
        return false;
    };
    let Some(target_at) = now
        .date_naive()
        .and_time(target)
        .and_local_timezone(Local)
        .earliest()
    else {
        return false;
    };

    let target_ms = target_at.timestamp_millis();
    let now_ms = now.timestamp_millis();
    now_ms >= target_ms - tolerance_ms && now_ms <= target_ms + tolerance_ms
}

#[derive(Debug)]
pub struct AutoRegister {
    interval: Option<TimerHandle>,
    rearm: Option<TimerHandle>,
    poll_ms: i64,
    tolerance_ms: i64,
}

impl AutoRegister {
    pub fn new(poll_ms: i64, tolerance_ms: i64) -> Self {
        Self {
            interval: None,
            rearm: None,
            poll_ms,
            tolerance_ms,
        }
    }

    /// Install the recurring evaluation, replacing any previous one.
    /// The caller is expected to evaluate once right away.
    pub fn arm(&mut self, timers: &mut Timers, now_ms: i64) {
        self.disarm(timers);
        if let Some(handle) = self.rearm.take() {
            timers.cancel(handle);
        }
        self.interval = Some(timers.every(now_ms, self.poll_ms, Job::AutoCheck));
    }

    pub fn disarm(&mut self, timers: &mut Timers) {
        if let Some(handle) = self.interval.take() {
            timers.cancel(handle);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn is_rearm_pending(&self) -> bool {
        self.rearm.is_some()
    }

    /// Kind to register now, if any. ENTRY is checked before EXIT and only
    /// the kind the ledger is actually waiting for can match.
    pub fn due(
        &self,
        next: NextAction,
        schedule: &ScheduleConfig,
        now: DateTime<Local>,
    ) -> Option<PunchKind> {
        PunchKind::AUTOMATIC.into_iter().find(|&kind| {
            next.kind == kind && within_window(schedule.target(kind), now, self.tolerance_ms)
        })
    }

    /// Stop evaluating after an automatic punch and come back once the
    /// tolerance window is over.
    pub fn after_fire(&mut self, timers: &mut Timers, now_ms: i64) {
        self.disarm(timers);
        if let Some(handle) = self.rearm.take() {
            timers.cancel(handle);
        }
        self.rearm = Some(timers.once(now_ms, 2 * self.tolerance_ms, Job::AutoRearm));
    }

    /// Consume the re-arm timer. Returns false for a handle that is not ours.
    pub fn take_rearm(&mut self, handle: TimerHandle) -> bool {
        if self.rearm == Some(handle) {
            self.rearm = None;
            true
        } else {
            false
        }
    }
}
