use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wellorder::{PlateSize, TraversalPattern};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "wellorder";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_size: Option<PlateSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<TraversalPattern>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `wellorder config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents, path)
    }

    /// The user's config, or the defaults when no config file exists yet.
    /// A config file that exists but does not parse is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::path()?;
        Self::load_or_default_from(&path)
    }

    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to read config: {e}")),
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Set one key in the config file at `path`, keeping every other key.
    /// Leaves the file untouched if it cannot be parsed or the value is invalid.
    pub fn set_in_file(path: &Path, key: &str, value: &str) -> Result<Self> {
        let mut config = Self::load_or_default_from(path)?;
        config.set(key, value)?;
        config.save_to(path)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# wellorder configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Configured default plate size, if any.
    pub fn plate_size(&self) -> Option<PlateSize> {
        self.defaults.as_ref().and_then(|d| d.plate_size)
    }

    /// Configured default traversal pattern, if any.
    pub fn pattern(&self) -> Option<TraversalPattern> {
        self.defaults.as_ref().and_then(|d| d.pattern)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.plate_size" => {
                let size = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(|s| PlateSize::try_from(s).ok())
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid plate size: {value}. Must be '96' or '384'.")
                    })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .plate_size = Some(size);
            }
            "defaults.pattern" => {
                let pattern: TraversalPattern = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid pattern: {value}. Must be 'spiral' or 'serpentine'.")
                })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .pattern = Some(pattern);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.plate_size, defaults.pattern"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_valid_values() {
        let mut config = Config::default();
        config.set("defaults.plate_size", "384").unwrap();
        config.set("defaults.pattern", "SERPENTINE").unwrap();
        assert_eq!(config.plate_size(), Some(PlateSize::Wells384));
        assert_eq!(config.pattern(), Some(TraversalPattern::Serpentine));
    }

    #[test]
    fn set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.plate_size", "100").is_err());
        assert!(config.set("defaults.plate_size", "lots").is_err());
        assert!(config.set("defaults.pattern", "zigzag").is_err());
        assert!(config.set("defaults.theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);

        let mut config = Config::default();
        config.set("defaults.plate_size", "384").unwrap();
        config.set("defaults.pattern", "spiral").unwrap();
        config.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# wellorder configuration"));
        assert!(contents.contains("plate_size: 384"));
        assert!(contents.contains("pattern: spiral"));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn empty_config_serializes_without_defaults() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("defaults"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn invalid_plate_size_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  plate_size: 100\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn invalid_plate_size_is_reported_not_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  plate_size: 348\n").unwrap();

        let err = Config::load_or_default_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("348"), "{err:#}");
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn invalid_pattern_is_reported_not_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  plate_size: 384\n  pattern: spirl\n").unwrap();
        assert!(Config::load_or_default_from(&path).is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default_from(&dir.path().join(FILENAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn set_does_not_overwrite_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        let broken = "defaults:\n  plate_size: 384\n  pattern: spirl\n";
        std::fs::write(&path, broken).unwrap();

        assert!(Config::set_in_file(&path, "defaults.pattern", "serpentine").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  plate_size: 384\n").unwrap();

        Config::set_in_file(&path, "defaults.pattern", "serpentine").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.plate_size(), Some(PlateSize::Wells384));
        assert_eq!(config.pattern(), Some(TraversalPattern::Serpentine));
    }

    #[test]
    fn set_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        Config::set_in_file(&path, "defaults.plate_size", "96").unwrap();
        assert_eq!(
            Config::load_from(&path).unwrap().plate_size(),
            Some(PlateSize::Wells96)
        );
    }
}
