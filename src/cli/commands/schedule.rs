use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::punch_kind::PunchKind;
use crate::models::schedule::ScheduleConfig;
use crate::ui::messages::success;
use crate::ui::terminal::TerminalSink;
use crate::utils::time::validate_optional_time;

/// Show or update the configured punch times.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        print,
        entry,
        break_start,
        break_end,
        exit,
    } = cmd
    {
        // validate everything before touching the store
        let updates = [
            (PunchKind::Entry, validate_optional_time(entry.as_ref())?),
            (PunchKind::BreakStart, validate_optional_time(break_start.as_ref())?),
            (PunchKind::BreakEnd, validate_optional_time(break_end.as_ref())?),
            (PunchKind::Exit, validate_optional_time(exit.as_ref())?),
        ];

        let mut session = open_session(cfg, TerminalSink::new())?;

        let changed = updates.iter().any(|(_, v)| v.is_some());
        if changed {
            let mut schedule = session.schedule().clone();
            for (kind, value) in updates {
                if let Some(v) = value {
                    schedule.set_time(kind, v);
                }
            }
            session.save_schedule(schedule)?;
            success("Schedule saved.");
        }

        if *print || !changed {
            print_schedule(session.schedule());
        }
    }

    Ok(())
}

fn print_schedule(schedule: &ScheduleConfig) {
    println!("🗓️  Schedule:");
    for kind in PunchKind::CYCLE {
        let auto = if PunchKind::AUTOMATIC.contains(&kind) {
            " (automatic)"
        } else {
            ""
        };
        println!(
            "  {:<14} {}{}",
            kind.list_label(),
            schedule.time_for(kind),
            auto
        );
    }
}
