//! Session context: the single owner of the ledger, the schedule, the
//! chronometer, the auto-registration scheduler and their timers.
//!
//! Every punch, manual or automatic, goes through `Session::punch`, so the
//! "next expected kind" check always sees the ledger as it is right now.
//! Other processes (`rpunchclock punch`, `rpunchclock schedule`) write to the
//! same store, so the session re-reads it before each punch and each
//! automatic evaluation.

use crate::config::Config;
use crate::core::chronometer::{Chronometer, persisted_elapsed};
use crate::core::clock::Clock;
use crate::core::ledger::Ledger;
use crate::core::scheduler::AutoRegister;
use crate::core::state_machine::NextAction;
use crate::core::timers::{Job, TimerHandle, Timers};
use crate::errors::AppResult;
use crate::models::origin::Origin;
use crate::models::period::Period;
use crate::models::punch::PunchRecord;
use crate::models::schedule::ScheduleConfig;
use crate::store::{KEY_SCHEDULE, Store};
use crate::ui::render::{RenderEvent, RenderSink};
use crate::utils::time::{MS_PER_SECOND, minutes_to_ms, seconds_to_ms};

/// Timing parameters of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub tolerance_ms: i64,
    pub poll_ms: i64,
    pub chrono_tick_ms: i64,
    pub wall_clock_ms: i64,
    pub auto_register: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance_ms: minutes_to_ms(5),
            poll_ms: seconds_to_ms(30),
            chrono_tick_ms: MS_PER_SECOND,
            wall_clock_ms: MS_PER_SECOND,
            auto_register: true,
        }
    }
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            tolerance_ms: minutes_to_ms(cfg.tolerance_minutes),
            poll_ms: seconds_to_ms(cfg.poll_interval_seconds),
            auto_register: cfg.auto_register,
            ..Self::default()
        }
    }
}

/// Read the persisted schedule; absent means defaults.
pub fn load_schedule(store: &dyn Store) -> AppResult<ScheduleConfig> {
    match store.get(KEY_SCHEDULE)? {
        Some(blob) => Ok(serde_json::from_str(&blob)?),
        None => Ok(ScheduleConfig::default()),
    }
}

pub struct Session<S: Store, C: Clock, R: RenderSink> {
    store: S,
    clock: C,
    sink: R,
    settings: Settings,
    ledger: Ledger,
    schedule: ScheduleConfig,
    chronometer: Chronometer,
    scheduler: AutoRegister,
    timers: Timers,
    wall_clock: Option<TimerHandle>,
    // set while the store lags behind the in-memory state after a failed write
    ledger_unsaved: bool,
    schedule_unsaved: bool,
}

impl<S: Store, C: Clock, R: RenderSink> Session<S, C, R> {
    /// Load schedule and ledger from the store. Unreadable data is reported
    /// to the sink and replaced by defaults, so a session always opens.
    pub fn open(store: S, clock: C, mut sink: R, settings: Settings) -> Self {
        let schedule = load_schedule(&store).unwrap_or_else(|e| {
            sink.render(RenderEvent::Warning(format!(
                "Could not read the schedule, using defaults: {}",
                e
            )));
            ScheduleConfig::default()
        });

        let ledger = Ledger::load(&store).unwrap_or_else(|e| {
            sink.render(RenderEvent::Warning(format!(
                "Could not read saved punches, starting empty: {}",
                e
            )));
            Ledger::new()
        });

        Self {
            store,
            clock,
            sink,
            settings,
            ledger,
            schedule,
            chronometer: Chronometer::new(settings.chrono_tick_ms),
            scheduler: AutoRegister::new(settings.poll_ms, settings.tolerance_ms),
            timers: Timers::new(),
            wall_clock: None,
            ledger_unsaved: false,
            schedule_unsaved: false,
        }
    }

    /// Bring the session to life: status, chronometer, wall clock and, when
    /// enabled, automatic registration.
    pub fn startup(&mut self) {
        self.render_status();
        self.restore_chronometer();

        let now_ms = self.clock.now_ms();
        if let Some(handle) = self.wall_clock.take() {
            self.timers.cancel(handle);
        }
        self.wall_clock = Some(
            self.timers
                .every(now_ms, self.settings.wall_clock_ms, Job::WallClock),
        );
        self.render_clock();

        if self.settings.auto_register {
            self.arm_auto_register();
        }
    }

    /// Next action, last punch and, for an open session, the elapsed time.
    pub fn report(&mut self) {
        self.render_status();
        match persisted_elapsed(&self.store, self.clock.now_ms()) {
            Ok(Some(text)) => self.sink.render(RenderEvent::Elapsed(text)),
            Ok(None) => {}
            Err(e) => self.warn(format!("Chronometer unavailable: {}", e)),
        }
    }

    fn restore_chronometer(&mut self) {
        let last_kind = self.ledger.last().map(|r| r.kind);
        let now_ms = self.clock.now_ms();
        match self
            .chronometer
            .restore(&self.store, last_kind, now_ms, &mut self.timers)
        {
            Ok(restored) => {
                self.sink
                    .render(RenderEvent::ChronometerVisible(restored));
                if let Some(text) = self.chronometer.elapsed_text(now_ms) {
                    self.sink.render(RenderEvent::Elapsed(text));
                }
            }
            Err(e) => self.warn(format!("Chronometer could not be restored: {}", e)),
        }
    }

    /// Adopt what other processes wrote to the store since the last look.
    /// In-memory state the store has not accepted yet is kept as it is.
    fn sync_from_store(&mut self) {
        if !self.schedule_unsaved
            && let Ok(schedule) = load_schedule(&self.store)
        {
            self.schedule = schedule;
        }

        if self.ledger_unsaved {
            return;
        }
        let changed = match Ledger::load(&self.store) {
            Ok(ledger) if ledger.records() != self.ledger.records() => {
                self.ledger = ledger;
                true
            }
            _ => false,
        };

        let last_kind = self.ledger.last().map(|r| r.kind);
        let was_visible = self.chronometer.is_visible();
        if let Err(e) =
            self.chronometer
                .resync(&self.store, last_kind, self.clock.now_ms(), &mut self.timers)
        {
            self.warn(format!("Chronometer could not be refreshed: {}", e));
        }

        if changed {
            self.render_status();
        }
        if was_visible != self.chronometer.is_visible() {
            self.sink.render(RenderEvent::ChronometerVisible(
                self.chronometer.is_visible(),
            ));
        }
    }

    /// Record the next punch in the cycle.
    pub fn punch(&mut self, origin: Origin) -> PunchRecord {
        self.sync_from_store();

        let now = self.clock.now();
        let now_ms = self.clock.now_ms();
        let had_unsaved = self.ledger_unsaved;

        let punch = self.ledger.record(&mut self.store, now, origin);
        let record = punch.record.clone();
        let mut saved = punch.persisted();

        if let Some(e) = &punch.persist_error {
            self.warn(format!(
                "{} kept in memory only, it could not be saved: {}",
                record.kind.label(),
                e
            ));
        }

        let suffix = if origin.is_automatic() {
            " (automatic)"
        } else {
            ""
        };
        self.sink.render(RenderEvent::Message(format!(
            "{} recorded{} at {}!",
            record.kind.label(),
            suffix,
            record.time_str()
        )));
        self.render_status();

        let chrono_saved = self
            .chronometer
            .on_punch(record.kind, now_ms, &mut self.store, &mut self.timers)
            .and_then(|_| {
                if had_unsaved {
                    self.chronometer.persist(&mut self.store)
                } else {
                    Ok(())
                }
            });
        if let Err(e) = chrono_saved {
            saved = false;
            self.warn(format!("Chronometer state could not be saved: {}", e));
        }
        self.ledger_unsaved = !saved;
        self.sink.render(RenderEvent::ChronometerVisible(
            self.chronometer.is_visible(),
        ));

        let message = format!(
            "{} {} at {} {}",
            origin.as_str(),
            record.kind.as_str(),
            record.date_str(),
            record.time_str()
        );
        if let Err(e) = self
            .store
            .log_operation("punch", record.kind.as_str(), &message)
        {
            self.warn(format!("Failed to write internal log: {}", e));
        }

        record
    }

    /// Start (or restart) the recurring evaluation and evaluate right away.
    pub fn arm_auto_register(&mut self) -> Option<PunchRecord> {
        let now_ms = self.clock.now_ms();
        self.scheduler.arm(&mut self.timers, now_ms);
        self.auto_check()
    }

    pub fn disarm_auto_register(&mut self) {
        self.scheduler.disarm(&mut self.timers);
    }

    /// One evaluation of the automatic registration. Does nothing while
    /// disarmed.
    pub fn auto_check(&mut self) -> Option<PunchRecord> {
        if !self.scheduler.is_armed() {
            return None;
        }
        self.sync_from_store();

        let now = self.clock.now();
        let kind = self
            .scheduler
            .due(self.ledger.next_action(), &self.schedule, now)?;

        let record = self.punch(Origin::Automatic);
        debug_assert_eq!(record.kind, kind);
        self.scheduler
            .after_fire(&mut self.timers, self.clock.now_ms());
        Some(record)
    }

    /// Replace the schedule and persist it. A running or cooling-down
    /// evaluation is restarted so the new times apply immediately.
    pub fn save_schedule(&mut self, schedule: ScheduleConfig) -> AppResult<()> {
        self.schedule = schedule;

        let blob = serde_json::to_string(&self.schedule)?;
        let saved = self.store.set(KEY_SCHEDULE, &blob);
        self.schedule_unsaved = saved.is_err();

        if saved.is_ok() {
            let message = format!(
                "entry={} break_start={} break_end={} exit={}",
                self.schedule.entry,
                self.schedule.break_start,
                self.schedule.break_end,
                self.schedule.exit
            );
            if let Err(e) = self.store.log_operation("schedule", "save", &message) {
                self.warn(format!("Failed to write internal log: {}", e));
            }
        }

        if self.scheduler.is_armed() || self.scheduler.is_rearm_pending() {
            self.arm_auto_register();
        }

        saved
    }

    /// Deliver every timer job due at the clock's current time.
    /// Returns the number of jobs delivered.
    pub fn advance(&mut self) -> usize {
        let mut delivered = 0;
        while let Some((handle, job)) = self.timers.pop_due(self.clock.now_ms()) {
            delivered += 1;
            match job {
                Job::WallClock => self.render_clock(),
                Job::Chronometer => {
                    if let Some(text) = self.chronometer.elapsed_text(self.clock.now_ms()) {
                        self.sink.render(RenderEvent::Elapsed(text));
                    }
                }
                Job::AutoCheck => {
                    self.auto_check();
                }
                Job::AutoRearm => {
                    if self.scheduler.take_rearm(handle) {
                        self.arm_auto_register();
                    }
                }
            }
        }
        delivered
    }

    /// Emit and return the records of `period`, most recent first.
    pub fn show_records(&mut self, period: Period) -> Vec<PunchRecord> {
        let today = self.clock.now().date_naive();
        let records = self.ledger.by_period(period, today);
        self.sink.render(RenderEvent::Records(records.clone()));
        records
    }

    fn render_status(&mut self) {
        let next = self.ledger.next_action();
        if let Some(last) = self.ledger.last() {
            self.sink.render(RenderEvent::LastPunch(last.summary()));
        }
        self.sink.render(RenderEvent::NextAction {
            label: next.kind.label().to_string(),
            category: next.category,
        });
    }

    fn render_clock(&mut self) {
        let text = self.clock.now().format("%H:%M:%S").to_string();
        self.sink.render(RenderEvent::Clock(text));
    }

    fn warn(&mut self, message: String) {
        self.sink.render(RenderEvent::Warning(message));
    }

    pub fn next_action(&self) -> NextAction {
        self.ledger.next_action()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    pub fn chronometer(&self) -> &Chronometer {
        &self.chronometer
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn is_auto_register_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn is_rearm_pending(&self) -> bool {
        self.scheduler.is_rearm_pending()
    }

    /// Earliest instant at which `advance` has something to deliver.
    pub fn next_due(&self) -> Option<i64> {
        self.timers.next_due()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
