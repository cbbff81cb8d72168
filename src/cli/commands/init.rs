use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteRepository;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing punchclock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db);

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut repo = SqliteRepository::open(&db)?;

    ttlog_quiet(
        &repo.pool().conn,
        "init",
        "database",
        &format!("Database initialized at {}", db),
    );

    success(format!("Database initialized at {}", db));
    Ok(())
}
