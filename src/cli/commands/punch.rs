use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockOutcome};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::format_long_date;
use crate::utils::mins2readable;
use crate::utils::time::format_clock_time;
use chrono::Local;

/// Perform the clock action for the session's employee.
pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::Punch = cmd {
        let (mut repo, mut session) = open_session(cfg, employee)?;

        let now = Local::now().naive_local();
        let outcome = ClockLogic::perform(&mut repo, &mut session, now)?;

        match &outcome {
            ClockOutcome::ClockedIn(e) => success(format!(
                "Clocked in at {} on {} (entry #{}).",
                format_clock_time(e.time_in),
                format_long_date(e.date),
                e.id
            )),
            ClockOutcome::ClockedOut(e) => {
                let out = e.time_out.map(format_clock_time).unwrap_or_default();
                let worked = e.worked_minutes().unwrap_or(0);
                success(format!(
                    "Clocked out at {} (entry #{}, worked {}).",
                    out,
                    e.id,
                    mins2readable(worked, false)
                ));
            }
        }

        info(format!("Next action: {}", session.clock_state()));
    }

    Ok(())
}
