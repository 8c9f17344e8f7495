use serde::{Deserialize, Serialize};

/// The four punch states, in the order a working day cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchKind {
    Entry,
    BreakStart,
    BreakEnd,
    Exit,
}

/// Display classification of a punch kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entry,
    Pause,
    Exit,
}

impl PunchKind {
    pub const CYCLE: [PunchKind; 4] = [
        PunchKind::Entry,
        PunchKind::BreakStart,
        PunchKind::BreakEnd,
        PunchKind::Exit,
    ];

    /// Kinds the scheduler may register on its own, in evaluation order.
    pub const AUTOMATIC: [PunchKind; 2] = [PunchKind::Entry, PunchKind::Exit];

    pub fn index(self) -> usize {
        match self {
            PunchKind::Entry => 0,
            PunchKind::BreakStart => 1,
            PunchKind::BreakEnd => 2,
            PunchKind::Exit => 3,
        }
    }

    pub fn successor(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    pub fn category(self) -> Category {
        match self {
            PunchKind::Entry => Category::Entry,
            PunchKind::BreakStart | PunchKind::BreakEnd => Category::Pause,
            PunchKind::Exit => Category::Exit,
        }
    }

    /// Convert enum → stored string
    pub fn as_str(self) -> &'static str {
        match self {
            PunchKind::Entry => "ENTRY",
            PunchKind::BreakStart => "BREAK_START",
            PunchKind::BreakEnd => "BREAK_END",
            PunchKind::Exit => "EXIT",
        }
    }

    /// Upper-case label shown as the next required action.
    pub fn label(self) -> &'static str {
        match self {
            PunchKind::Entry => "ENTRY",
            PunchKind::BreakStart => "BREAK (START)",
            PunchKind::BreakEnd => "BREAK (END)",
            PunchKind::Exit => "EXIT",
        }
    }

    /// Label used in record listings.
    pub fn list_label(self) -> &'static str {
        match self {
            PunchKind::Entry => "Entry",
            PunchKind::BreakStart => "Break (start)",
            PunchKind::BreakEnd => "Break (end)",
            PunchKind::Exit => "Exit",
        }
    }
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Entry => "entry",
            Category::Pause => "pause",
            Category::Exit => "exit",
        }
    }
}
