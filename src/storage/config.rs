use super::Result;
use crate::error::StorageError;
use crate::utils::input::EnvConfigReader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Defaults used by the extension helpers when the caller has no preference
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    pub time_format: String,
    pub bool_labels: BoolLabels,
}

/// Text shown for `true` and `false`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BoolLabels {
    pub when_true: String,
    pub when_false: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            bool_labels: BoolLabels::default(),
        }
    }
}

impl Default for BoolLabels {
    fn default() -> Self {
        Self {
            when_true: "Yes".to_string(),
            when_false: "No".to_string(),
        }
    }
}

impl BoolLabels {
    pub fn label(&self, value: bool) -> &str {
        if value {
            &self.when_true
        } else {
            &self.when_false
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the user config directory when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_path.to_string_lossy()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParse {
                message: e.to_string(),
            })?;

        if settings.page_size == 0 {
            log::warn!(
                "page_size of 0 in {} ignored, using {}",
                config_path.to_string_lossy(),
                DEFAULT_PAGE_SIZE
            );
            settings.page_size = DEFAULT_PAGE_SIZE;
        }

        Ok(settings)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigSerialize {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Apply `EXTKIT_PAGE_SIZE` and `EXTKIT_TIME_FORMAT` on top of these settings
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(
            EnvConfigReader::read_page_size(),
            EnvConfigReader::read_time_format(),
        )
    }

    fn apply_overrides(mut self, page_size: Option<usize>, time_format: Option<String>) -> Self {
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        if let Some(time_format) = time_format {
            self.time_format = time_format;
        }
        self
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("extkit").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::tempdir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.time_format, "%H:%M");
        assert_eq!(settings.bool_labels.label(true), "Yes");
        assert_eq!(settings.bool_labels.label(false), "No");
    }

    #[test]
    fn test_settings_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings {
            page_size: 50,
            time_format: "%H:%M:%S".to_string(),
            bool_labels: BoolLabels {
                when_true: "On".to_string(),
                when_false: "Off".to_string(),
            },
        };

        settings
            .save(Some(config_path.clone()))
            .expect("Failed to save settings");

        let loaded = Settings::load(Some(config_path)).expect("Failed to load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "page_size = 5\n").expect("Failed to write config");

        let loaded = Settings::load(Some(config_path)).expect("Failed to load settings");
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.time_format, DEFAULT_TIME_FORMAT);
        assert_eq!(loaded.bool_labels, BoolLabels::default());
    }

    #[test]
    fn test_load_zero_page_size_falls_back() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "page_size = 0\n").expect("Failed to write config");

        let loaded = Settings::load(Some(config_path)).expect("Failed to load settings");
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "page_size = [").expect("Failed to write config");

        let result = Settings::load(Some(config_path));
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::ConfigParse { .. }))
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let settings = Settings::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_apply_overrides() {
        let settings = Settings::default().apply_overrides(Some(7), None);
        assert_eq!(settings.page_size, 7);
        assert_eq!(settings.time_format, DEFAULT_TIME_FORMAT);

        let settings = Settings::default().apply_overrides(None, Some("%I:%M %p".to_string()));
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.time_format, "%I:%M %p");
    }
}
