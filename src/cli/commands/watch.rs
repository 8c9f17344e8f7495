use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::ui::terminal::TerminalSink;
use std::thread;
use std::time::Duration;

/// Longest sleep between two passes over the timers.
const MAX_SLEEP_MS: i64 = 1_000;

/// Run the session loop until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { once } = cmd {
        let sink = if *once {
            TerminalSink::new()
        } else {
            TerminalSink::live()
        };
        let mut session = open_session(cfg, sink)?;
        session.startup();

        if *once {
            session.advance();
            return Ok(());
        }

        loop {
            let now_ms = session.clock().now_ms();
            let wait_ms = session
                .next_due()
                .map(|due| (due - now_ms).clamp(0, MAX_SLEEP_MS))
                .unwrap_or(MAX_SLEEP_MS);
            thread::sleep(Duration::from_millis(wait_ms as u64));
            session.advance();
        }
    }

    Ok(())
}
