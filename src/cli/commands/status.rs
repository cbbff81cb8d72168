use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ClockState;
use crate::utils::date::format_long_date;
use crate::utils::time::format_clock_time;

pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::Status = cmd {
        let (_repo, session) = open_session(cfg, employee)?;

        println!("👤 {}", session.employee().label());

        match session.clock_state() {
            ClockState::ClockIn => println!("Ready to Clock In"),
            ClockState::ClockOut => {
                println!("Ready to Clock Out");
                if let Some(last) = session.entries().last() {
                    println!(
                        "Clocked in since {} on {}",
                        format_clock_time(last.time_in),
                        format_long_date(last.date)
                    );
                }
            }
        }
    }

    Ok(())
}
