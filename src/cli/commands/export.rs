use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::utils::range::DateRange;

pub fn handle(cmd: &Commands, cfg: &Config, employee: Option<&str>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        all,
        force,
    } = cmd
    {
        let range = DateRange::parse_optional(range.as_deref())?;
        let employee_id = if *all {
            None
        } else {
            Some(cfg.resolve_employee(employee)?)
        };

        let repo = SqliteRepository::open(&cfg.database)?;
        let req = ExportRequest {
            format: *format,
            file: file.as_str(),
            range,
            employee: employee_id.as_deref(),
            all: *all,
            force: *force,
        };
        ExportLogic::export(&repo, &req, cfg)?;
    }
    Ok(())
}
