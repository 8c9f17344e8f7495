use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::terminal::TerminalSink;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut session = open_session(cfg, TerminalSink::new())?;
        println!("📋 Punches ({}):\n", period.as_str());
        session.show_records(*period);
    }
    Ok(())
}
