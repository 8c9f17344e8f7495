use super::punch_kind::PunchKind;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Configured time of day ("HH:MM") for each punch kind.
///
/// Values are kept as entered: a malformed time is never rejected here, it
/// simply never matches during automatic registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_entry")]
    pub entry: String,
    #[serde(default = "default_break_start")]
    pub break_start: String,
    #[serde(default = "default_break_end")]
    pub break_end: String,
    #[serde(default = "default_exit")]
    pub exit: String,
}

fn default_entry() -> String {
    "08:00".to_string()
}
fn default_break_start() -> String {
    "12:00".to_string()
}
fn default_break_end() -> String {
    "13:00".to_string()
}
fn default_exit() -> String {
    "17:00".to_string()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            break_start: default_break_start(),
            break_end: default_break_end(),
            exit: default_exit(),
        }
    }
}

impl ScheduleConfig {
    pub fn time_for(&self, kind: PunchKind) -> &str {
        match kind {
            PunchKind::Entry => &self.entry,
            PunchKind::BreakStart => &self.break_start,
            PunchKind::BreakEnd => &self.break_end,
            PunchKind::Exit => &self.exit,
        }
    }

    pub fn set_time(&mut self, kind: PunchKind, value: impl Into<String>) {
        let slot = match kind {
            PunchKind::Entry => &mut self.entry,
            PunchKind::BreakStart => &mut self.break_start,
            PunchKind::BreakEnd => &mut self.break_end,
            PunchKind::Exit => &mut self.exit,
        };
        *slot = value.into();
    }

    /// Parsed target time for `kind`, `None` when the stored value is malformed.
    pub fn target(&self, kind: PunchKind) -> Option<NaiveTime> {
        parse_time(self.time_for(kind))
    }
}
