use crate::error::{ModtrackError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "modules.json";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "MODTRACK_DATA";

/// Settings stored in `config.json` next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Data file name, relative to the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Show "in 3 days" style countdowns next to deadlines.
    #[serde(default = "default_show_countdown")]
    pub show_countdown: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_show_countdown() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            show_countdown: default_show_countdown(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ModtrackError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(ModtrackError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ModtrackError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ModtrackError::Serialization)?;
        fs::write(config_path, content).map_err(ModtrackError::Io)?;
        Ok(())
    }

    /// Full path of the data file inside `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}

/// Picks the data directory: explicit flag, then `MODTRACK_DATA`, then the
/// platform data directory.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "modtrack", "modtrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ModtrackError::Store("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.data_file, "modules.json");
        assert!(config.show_countdown);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig {
            data_file: "sem2.json".to_string(),
            show_countdown: false,
        };
        config.save(dir.path().join("sub")).unwrap();

        let loaded = TrackerConfig::load(dir.path().join("sub")).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.data_path(dir.path()),
            dir.path().join("sem2.json")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"show_countdown": false}"#).unwrap();
        assert_eq!(config.data_file, "modules.json");
        assert!(!config.show_countdown);
    }

    #[test]
    fn test_flag_wins_over_everything() {
        let dir = PathBuf::from("/tmp/explicit");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
