pub mod add;
pub mod config;
pub mod del;
pub mod employee;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the repository and log the selected employee in.
pub(crate) fn open_session(
    cfg: &Config,
    employee: Option<&str>,
) -> AppResult<(SqliteRepository, Session)> {
    let employee_id = cfg.resolve_employee(employee)?;
    let repo = SqliteRepository::open(&cfg.database)?;
    let session = Session::open(&repo, &employee_id)?;
    Ok((repo, session))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
