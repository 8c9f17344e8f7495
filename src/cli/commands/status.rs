use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::terminal::TerminalSink;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg, TerminalSink::new())?;
    if session.ledger().is_empty() {
        println!("No punches recorded yet.");
    }
    session.report();
    Ok(())
}
