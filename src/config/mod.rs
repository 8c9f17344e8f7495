use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_tolerance_minutes")]
    pub tolerance_minutes: i64,
    #[serde(default = "default_poll_interval_seconds")]
    pub poll_interval_seconds: i64,
    #[serde(default = "default_auto_register")]
    pub auto_register: bool,
}

fn default_tolerance_minutes() -> i64 {
    5
}
fn default_poll_interval_seconds() -> i64 {
    30
}
fn default_auto_register() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            tolerance_minutes: default_tolerance_minutes(),
            poll_interval_seconds: default_poll_interval_seconds(),
            auto_register: default_auto_register(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpunchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpunchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("⚠️  {} (using defaults)", e);
                Self::default()
            }
        }
    }

    pub fn try_load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validated()
    }

    fn validated(self) -> AppResult<Self> {
        if self.tolerance_minutes < 0 {
            return Err(AppError::Config(format!(
                "tolerance_minutes must not be negative (got {})",
                self.tolerance_minutes
            )));
        }
        if self.poll_interval_seconds <= 0 {
            return Err(AppError::Config(format!(
                "poll_interval_seconds must be positive (got {})",
                self.poll_interval_seconds
            )));
        }
        Ok(self)
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
