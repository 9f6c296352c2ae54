use crate::errors::AppResult;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Extra directory scanned for fonts before rasterizing (empty = system fonts only)
    #[serde(default)]
    pub font_dir: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
    #[serde(default = "default_slot_a_label")]
    pub slot_a_label: String,
    #[serde(default = "default_slot_b_label")]
    pub slot_b_label: String,
    #[serde(default = "default_unidentified_title")]
    pub unidentified_title: String,
    #[serde(default = "default_total_suffix")]
    pub total_suffix: String,
    /// `fr` or `en`
    #[serde(default = "default_date_locale")]
    pub date_locale: String,
    /// Pause before an off-screen grid frame is rasterized
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_font_family() -> String {
    "Arial".to_string()
}
fn default_report_title() -> String {
    "Liste des enfants".to_string()
}
fn default_slot_a_label() -> String {
    "Activité 1".to_string()
}
fn default_slot_b_label() -> String {
    "Activité 2".to_string()
}
fn default_unidentified_title() -> String {
    "Enfant qui n'a pas choisi d'activité".to_string()
}
fn default_total_suffix() -> String {
    "d'enfants".to_string()
}
fn default_date_locale() -> String {
    "fr".to_string()
}
fn default_settle_delay_ms() -> u64 {
    100
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
            output_dir: default_output_dir(),
            font_dir: String::new(),
            font_family: default_font_family(),
            report_title: default_report_title(),
            slot_a_label: default_slot_a_label(),
            slot_b_label: default_slot_b_label(),
            unidentified_title: default_unidentified_title(),
            total_suffix: default_total_suffix(),
            date_locale: default_date_locale(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rosterboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rosterboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rosterboard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rosterboard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize configuration directory, config file and empty DB file.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
