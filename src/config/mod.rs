use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub default_employee: Option<String>,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
    #[serde(default = "default_pdf_font_size")]
    pub pdf_font_size: f32,
    #[serde(default = "default_pdf_line_height")]
    pub pdf_line_height: f32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_confirm_delete() -> bool {
    true
}
fn default_pdf_font_size() -> f32 {
    10.0
}
fn default_pdf_line_height() -> f32 {
    16.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_employee: None,
            confirm_delete: default_confirm_delete(),
            pdf_font_size: default_pdf_font_size(),
            pdf_line_height: default_pdf_line_height(),
        }
    }
}

impl Config {
    /// Platform configuration directory (`~/.punchclock`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Employee passed on the command line wins over the configured default.
    pub fn resolve_employee(&self, cli_employee: Option<&str>) -> AppResult<String> {
        cli_employee
            .map(str::to_string)
            .or_else(|| self.default_employee.clone())
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AppError::Validation(
                    "No employee selected: pass --employee <ID> or set default_employee.".into(),
                )
            })
    }

    /// Create the config directory and file (unless `is_test`).
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        // a custom path is used as given, exactly like the --db override
        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(db_path)
    }
}
