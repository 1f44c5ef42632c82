use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How strictly the pay calculator checks its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayValidation {
    /// Any finite number is accepted.
    #[default]
    Permissive,
    /// Hours and rate must be >= 0, deduction within 0..=100.
    Strict,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_rate: Option<f64>,
    #[serde(default)]
    pub default_deduction: Option<f64>,
    #[serde(default)]
    pub pay_validation: PayValidation,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_rate: None,
            default_deduction: None,
            pay_validation: PayValidation::default(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rtimecard")
        } else {
            base.join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimecard.sqlite")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the DB path given on the command line: relative names live in the config dir.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the config directory and file. Returns the database path written into it.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Self::with_database(db_path.clone());
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("rtimecard_missing_config.conf");
        fs::remove_file(&path).ok();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.pay_validation, PayValidation::Permissive);
        assert_eq!(cfg.default_rate, None);
        assert_eq!(cfg.separator_char, "-");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let path = std::env::temp_dir().join("rtimecard_partial_config.conf");
        fs::write(
            &path,
            "database: /tmp/x.sqlite\ndefault_rate: 21.5\npay_validation: strict\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_rate, Some(21.5));
        assert_eq!(cfg.default_deduction, None);
        assert_eq!(cfg.pay_validation, PayValidation::Strict);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let path = std::env::temp_dir().join("rtimecard_broken_config.conf");
        fs::write(&path, "database: [unterminated\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
        fs::remove_file(&path).ok();
    }
}
