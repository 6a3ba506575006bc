use crate::error::{CmdrefError, Result};
use crate::store::fs::CMDREF_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cmdref, stored in `<user-config-dir>/cmdref/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CmdrefConfig {
    /// Name of the commands file inside the cmdref directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Write the commands file indented instead of on one line
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_file_name() -> String {
    CMDREF_FILE_NAME.to_string()
}

impl Default for CmdrefConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            pretty_json: false,
        }
    }
}

impl CmdrefConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CmdrefError::Io)?;
        let config: CmdrefConfig = serde_json::from_str(&content).map_err(|e| {
            CmdrefError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CmdrefError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CmdrefError::Serialization)?;
        fs::write(config_path, content).map_err(CmdrefError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let name = Path::new(&self.file_name);
        if self.file_name.trim().is_empty() || name.components().count() != 1 {
            return Err(CmdrefError::Config(format!(
                "file_name must be a bare file name, got '{}'",
                self.file_name
            )));
        }
        Ok(())
    }

    /// The commands file inside `config_dir`.
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        config_dir.as_ref().join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CmdrefConfig::default();
        assert_eq!(config.file_name, "cmdref.json");
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CmdrefConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, CmdrefConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CmdrefConfig {
            file_name: "work.json".to_string(),
            pretty_json: true,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = CmdrefConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.data_path(temp_dir.path()),
            temp_dir.path().join("work.json")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"pretty_json": true}"#).unwrap();

        let loaded = CmdrefConfig::load(temp_dir.path()).unwrap();
        assert!(loaded.pretty_json);
        assert_eq!(loaded.file_name, "cmdref.json");
    }

    #[test]
    fn test_rejects_nested_file_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"file_name": "../elsewhere.json"}"#,
        )
        .unwrap();

        let err = CmdrefConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CmdrefError::Config(_)));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "pretty_json = true").unwrap();

        let err = CmdrefConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CmdrefError::Config(_)));
    }
}
