//! ANSI color helper utilities for terminal output.

use crate::models::punch_kind::{Category, PunchKind};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Color of the next-action banner for a display category.
pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::Entry => GREEN,
        Category::Pause => YELLOW,
        Category::Exit => RED,
    }
}

/// Color of a punch kind inside record listings.
pub fn color_for_kind(kind: PunchKind) -> &'static str {
    match kind {
        PunchKind::Entry => GREEN,
        PunchKind::BreakStart => YELLOW,
        PunchKind::BreakEnd => BLUE,
        PunchKind::Exit => RED,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
