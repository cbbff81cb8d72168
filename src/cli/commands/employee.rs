use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::db::{SqliteRepository, WorkEntryRepository};
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut repo = SqliteRepository::open(&cfg.database)?;

        match action {
            EmployeeAction::Add { id, name } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(AppError::Validation("Employee ID is required.".into()));
                }

                let emp = Employee::new(id, name.clone());
                repo.add_employee(&emp)?;
                success(format!("Employee {} added.", emp.label()));
            }

            EmployeeAction::Del { id, yes } => {
                let emp = repo
                    .get_employee(id)?
                    .ok_or_else(|| AppError::EmployeeNotFound(id.clone()))?;

                let prompt = format!(
                    "Delete employee {} and ALL of their entries? This action is irreversible.",
                    emp.label()
                );
                if !*yes && cfg.confirm_delete && !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                repo.remove_employee(&emp.id)?;
                success(format!("Employee {} deleted.", emp.label()));
            }

            EmployeeAction::Show { id } => {
                let emp = repo
                    .get_employee(id)?
                    .ok_or_else(|| AppError::EmployeeNotFound(id.clone()))?;
                let entries = repo.list_entries(&emp.id)?;

                println!("👤 {}", emp.label());
                println!("Entries: {}", entries.len());
            }

            EmployeeAction::List => {
                let employees = repo.list_employees()?;
                if employees.is_empty() {
                    info("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "Name", "Entries"]);
                for (emp, count) in employees {
                    table.add_row(vec![emp.id, emp.name.unwrap_or_default(), count.to_string()]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
