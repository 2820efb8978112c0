use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "RATTENDANCE_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Reject students of unknown classes and marks of unknown periods/students.
    #[serde(default)]
    pub strict_references: bool,
    #[serde(default = "default_import_delimiter")]
    pub import_delimiter: String,
}

fn default_import_delimiter() -> String {
    ",".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            strict_references: false,
            import_delimiter: default_import_delimiter(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV) {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Resolve a user-given database path: `~` is expanded and relative
    /// names live in the configuration directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Single-byte CSV delimiter used by the bulk import.
    pub fn delimiter(&self) -> AppResult<u8> {
        match self.import_delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AppError::Config(format!(
                "import_delimiter must be a single ASCII character, got '{}'",
                self.import_delimiter
            ))),
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_db_path(&name),
            None => dir.join("rattendance.sqlite"),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/a.sqlite\n").expect("yaml");
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert!(!cfg.strict_references);
        assert_eq!(cfg.import_delimiter, ",");
        assert_eq!(cfg.delimiter().expect("delimiter"), b',');
    }

    #[test]
    fn relative_db_paths_live_in_the_config_dir() {
        assert_eq!(
            Config::resolve_db_path("/tmp/a.sqlite"),
            PathBuf::from("/tmp/a.sqlite")
        );
        assert_eq!(
            Config::resolve_db_path("rel.sqlite"),
            Config::config_dir().join("rel.sqlite")
        );
    }

    #[test]
    fn delimiter_must_be_one_byte() {
        let cfg = Config {
            database: "x".into(),
            strict_references: true,
            import_delimiter: ";;".into(),
        };
        assert!(matches!(cfg.delimiter(), Err(AppError::Config(_))));

        let cfg = Config {
            import_delimiter: ";".into(),
            ..cfg
        };
        assert_eq!(cfg.delimiter().expect("delimiter"), b';');
    }
}
