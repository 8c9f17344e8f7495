use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::origin::Origin;
use crate::ui::terminal::TerminalSink;

/// Register a manual punch.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg, TerminalSink::new())?;
    session.punch(Origin::Manual);
    Ok(())
}
