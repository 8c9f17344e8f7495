//! Terminal rendering for the CLI.

use crate::models::punch::PunchRecord;
use crate::ui::messages::{info, success, warning};
use crate::ui::render::{RenderEvent, RenderSink};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_category, color_for_kind, paint};
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

/// Prints events as they come. With `live` set, clock and chronometer
/// refreshes overwrite a single status line instead of scrolling.
#[derive(Debug, Default)]
pub struct TerminalSink {
    live: bool,
    clock: String,
    elapsed: Option<String>,
    status_line_open: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live() -> Self {
        Self {
            live: true,
            ..Self::default()
        }
    }

    fn refresh_status_line(&mut self) {
        let chrono = match &self.elapsed {
            Some(e) => format!("  ⏱  {}{}{}", CYAN, e, RESET),
            None => String::new(),
        };
        print!("\r🕒 {}{}", self.clock, chrono);
        io::stdout().flush().ok();
        self.status_line_open = true;
    }

    fn break_status_line(&mut self) {
        if self.status_line_open {
            println!();
            self.status_line_open = false;
        }
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Clock(time) => {
                self.clock = time;
                if self.live {
                    self.refresh_status_line();
                }
            }
            RenderEvent::Elapsed(elapsed) => {
                if self.live {
                    self.elapsed = Some(elapsed);
                    self.refresh_status_line();
                } else {
                    println!("⏱  Elapsed: {}", paint(&elapsed, CYAN));
                }
            }
            RenderEvent::ChronometerVisible(visible) => {
                if !visible {
                    self.elapsed = None;
                }
            }
            RenderEvent::NextAction { label, category } => {
                self.break_status_line();
                println!(
                    "➡️  Next: {} [{}]",
                    paint(&label, color_for_category(category)),
                    category.as_str()
                );
            }
            RenderEvent::LastPunch(summary) => {
                self.break_status_line();
                info(format!("Last punch: {}", summary));
            }
            RenderEvent::Records(records) => {
                self.break_status_line();
                print_records(&records);
            }
            RenderEvent::Message(msg) => {
                self.break_status_line();
                success(msg);
            }
            RenderEvent::Warning(msg) => {
                self.break_status_line();
                warning(msg);
            }
        }
    }
}

fn print_records(records: &[PunchRecord]) {
    if records.is_empty() {
        println!("{}No records found for this period.{}", GREY, RESET);
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("DATE", 10),
        Column::new("TIME", 8),
        Column::new("KIND", 20),
    ]);

    for r in records {
        let auto = if r.origin.is_automatic() { " (Auto)" } else { "" };
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.time_str(),
            format!("{}{}", r.kind.list_label(), auto),
        ]);
    }

    // color each row after padding so widths stay aligned
    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{}", header);
    }
    for (line, r) in lines.zip(records) {
        println!("{}", paint(line, color_for_kind(r.kind)));
    }
}
