//! Elapsed-time counter for the open work session.
//!
//! The anchor is the instant of the last ENTRY. It is persisted so that a new
//! process can pick the session up again, and mirrored in memory so the
//! counter keeps working for this process when the store refuses writes.
//! Break time is not deducted: after BREAK_END the counter resumes from the
//! original anchor.

use crate::core::timers::{Job, TimerHandle, Timers};
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use crate::store::{KEY_CHRONO_START, Store};
use crate::utils::time::format_elapsed;

fn read_anchor(store: &dyn Store) -> AppResult<Option<i64>> {
    match store.get(KEY_CHRONO_START)? {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::InvalidAnchor(raw.clone())),
        None => Ok(None),
    }
}

/// Elapsed time of the persisted session, if one is open. No timer involved.
pub fn persisted_elapsed(store: &dyn Store, now_ms: i64) -> AppResult<Option<String>> {
    Ok(read_anchor(store)?.map(|anchor| format_elapsed(now_ms - anchor)))
}

#[derive(Debug)]
pub struct Chronometer {
    anchor: Option<i64>,
    tick: Option<TimerHandle>,
    visible: bool,
    period_ms: i64,
}

impl Chronometer {
    pub fn new(period_ms: i64) -> Self {
        Self {
            anchor: None,
            tick: None,
            visible: false,
            period_ms,
        }
    }

    /// React to the punch that was just recorded.
    ///
    /// Only the store write can fail; the in-memory state is updated either way.
    pub fn on_punch(
        &mut self,
        kind: PunchKind,
        now_ms: i64,
        store: &mut dyn Store,
        timers: &mut Timers,
    ) -> AppResult<()> {
        match kind {
            PunchKind::Entry => {
                self.anchor = Some(now_ms);
                self.start(now_ms, timers);
                self.visible = true;
                store.set(KEY_CHRONO_START, &now_ms.to_string())
            }
            PunchKind::BreakStart => {
                self.stop(timers);
                Ok(())
            }
            PunchKind::BreakEnd => {
                self.start(now_ms, timers);
                self.visible = true;
                Ok(())
            }
            PunchKind::Exit => {
                self.stop(timers);
                self.anchor = None;
                self.visible = false;
                store.remove(KEY_CHRONO_START)
            }
        }
    }

    /// Pick up a session left open by a previous process.
    ///
    /// Any persisted anchor reopens the chronometer. The tick is only started
    /// when the last punch is not BREAK_START, so a paused session stays frozen.
    pub fn restore(
        &mut self,
        store: &dyn Store,
        last_kind: Option<PunchKind>,
        now_ms: i64,
        timers: &mut Timers,
    ) -> AppResult<bool> {
        let Some(anchor) = read_anchor(store)? else {
            return Ok(false);
        };

        self.anchor = Some(anchor);
        self.visible = true;
        if last_kind != Some(PunchKind::BreakStart) {
            self.start(now_ms, timers);
        }
        Ok(true)
    }

    /// Follow the anchor currently persisted, which another process may have
    /// set or cleared. A running tick is left alone.
    pub fn resync(
        &mut self,
        store: &dyn Store,
        last_kind: Option<PunchKind>,
        now_ms: i64,
        timers: &mut Timers,
    ) -> AppResult<()> {
        match read_anchor(store)? {
            Some(anchor) => {
                self.anchor = Some(anchor);
                self.visible = true;
                if last_kind == Some(PunchKind::BreakStart) {
                    self.stop(timers);
                } else if !self.is_ticking() {
                    self.start(now_ms, timers);
                }
            }
            None => {
                self.stop(timers);
                self.anchor = None;
                self.visible = false;
            }
        }
        Ok(())
    }

    /// Write the in-memory anchor back, or clear it when no session is open.
    pub fn persist(&self, store: &mut dyn Store) -> AppResult<()> {
        match self.anchor {
            Some(anchor) => store.set(KEY_CHRONO_START, &anchor.to_string()),
            None => store.remove(KEY_CHRONO_START),
        }
    }

    fn start(&mut self, now_ms: i64, timers: &mut Timers) {
        self.stop(timers);
        self.tick = Some(timers.every(now_ms, self.period_ms, Job::Chronometer));
    }

    fn stop(&mut self, timers: &mut Timers) {
        if let Some(handle) = self.tick.take() {
            timers.cancel(handle);
        }
    }

    /// Formatted elapsed time, `None` when no session is open.
    pub fn elapsed_text(&self, now_ms: i64) -> Option<String> {
        self.anchor.map(|anchor| format_elapsed(now_ms - anchor))
    }

    pub fn anchor(&self) -> Option<i64> {
        self.anchor
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }
}
