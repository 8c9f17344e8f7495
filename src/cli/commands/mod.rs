pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod schedule;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::session::{Session, Settings};
use crate::db::initialize::open_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::terminal::TerminalSink;

pub type CliSession = Session<DbPool, SystemClock, TerminalSink>;

/// Open the configured database and a session on top of it.
pub fn open_session(cfg: &Config, sink: TerminalSink) -> AppResult<CliSession> {
    let pool = open_store(cfg.database_path())?;
    Ok(Session::open(
        pool,
        SystemClock,
        sink,
        Settings::from_config(cfg),
    ))
}
