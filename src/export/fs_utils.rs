use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Expand `~` and anchor relative paths at the working directory.
pub(crate) fn resolve_output(file: &str) -> AppResult<PathBuf> {
    if file.trim().is_empty() {
        return Err(AppError::Validation("Output file path is required.".into()));
    }

    let p = expand_tilde(file.trim());
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(std::env::current_dir()?.join(p))
    }
}

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}
