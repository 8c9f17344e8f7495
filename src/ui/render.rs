//! Outbound rendering events. The core only pushes formatted values here and
//! never reads anything back.

use crate::models::punch::PunchRecord;
use crate::models::punch_kind::Category;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Current wall-clock time, HH:MM:SS.
    Clock(String),
    /// Next required punch.
    NextAction { label: String, category: Category },
    /// Chronometer value, HH:MM:SS.
    Elapsed(String),
    ChronometerVisible(bool),
    /// Summary of the most recent punch.
    LastPunch(String),
    /// Filtered records, most recent first.
    Records(Vec<PunchRecord>),
    /// Transient success message.
    Message(String),
    Warning(String),
}

pub trait RenderSink {
    fn render(&mut self, event: RenderEvent);
}

/// Sink that keeps every event. Clones share the same buffer.
///
/// Test double: the binary renders through `TerminalSink`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn last_elapsed(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::Elapsed(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Warning(w) => Some(w.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, event: RenderEvent) {
        self.events.borrow_mut().push(event);
    }
}
