use crate::errors::{AppError, AppResult};
use crate::models::career::CareerType;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_true")]
    pub show_saint: bool,
    #[serde(default = "default_true")]
    pub show_holiday: bool,
    #[serde(default = "default_agenda_days")]
    pub agenda_days: i64,
    #[serde(default)]
    pub default_career: CareerType,
}

/// Keys every config file is expected to carry (`config --check`).
pub const CONFIG_KEYS: [&str; 6] = [
    "database",
    "separator_char",
    "show_saint",
    "show_holiday",
    "agenda_days",
    "default_career",
];

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_true() -> bool {
    true
}
fn default_agenda_days() -> i64 {
    30
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
            separator_char: default_separator_char(),
            show_saint: true,
            show_holiday: true,
            agenda_days: default_agenda_days(),
            default_career: CareerType::default(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("datecountdown")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".datecountdown")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("datecountdown.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("datecountdown.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Keys from [`CONFIG_KEYS`] absent from the YAML document at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .filter(|k| !map.contains_key(**k))
            .copied()
            .collect())
    }

    /// Prepare the database directory and write the configuration file
    /// pointing at `db_path`. In test mode the config directory and file are
    /// left untouched.
    pub fn init_all(db_path: &Path, is_test: bool) -> AppResult<()> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Self::with_database(db_path.to_path_buf());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_datecountdown.conf"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/datecountdown.conf")).unwrap();
        assert!(cfg.show_saint);
        assert_eq!(cfg.agenda_days, 30);
        assert_eq!(cfg.default_career, CareerType::Normale);
    }

    #[test]
    fn partial_file_uses_serde_defaults() {
        let path = temp_conf("partial", "database: /tmp/x.sqlite\nshow_holiday: false\n");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert!(!cfg.show_holiday);
        assert_eq!(cfg.separator_char, "-");

        let missing = Config::missing_keys(&path).unwrap();
        assert_eq!(
            missing,
            vec!["separator_char", "show_saint", "agenda_days", "default_career"]
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn defaults_round_trip_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("default_career: normale"));
        let path = temp_conf("roundtrip", &yaml);
        assert!(Config::missing_keys(&path).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mode_only_prepares_the_database_directory() {
        let dir = env::temp_dir().join("datecountdown_init_all");
        fs::remove_dir_all(&dir).ok();
        let db = dir.join("nested").join("events.sqlite");

        Config::init_all(&db, true).unwrap();
        assert!(dir.join("nested").is_dir());
        assert!(!db.exists());

        fs::remove_dir_all(&dir).ok();
    }
}
