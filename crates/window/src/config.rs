use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use manlab_core::{Layout, Params};

const DEFAULT_PATH: &str = "manlab.toml";
const ENV_PATH: &str = "MANLAB_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Physics runs once per presented frame, so turning this off speeds the
    /// game up.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game Window".to_string(),
            width: 1920,
            height: 1080,
            vsync: true,
        }
    }
}

/// Top-level desktop configuration, loadable from TOML. Every table and key
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub params: Params,
    pub layout: Layout,
}

impl GameConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Resolves the config path from `--config`, then `MANLAB_CONFIG`, then
    /// `manlab.toml` in the working directory. Only the implicit default may
    /// be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var_os(ENV_PATH) {
                Some(p) => (PathBuf::from(p), true),
                None => (PathBuf::from(DEFAULT_PATH), false),
            },
        };

        if !required && !path.exists() {
            log::debug!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.window.title, "Game Window");
        assert_eq!((config.window.width, config.window.height), (1920, 1080));
    }

    #[test]
    fn tables_override_individual_keys() {
        let config = GameConfig::from_toml_str(
            r#"
            [window]
            vsync = false

            [params]
            gravity = 3.0

            [layout]
            floor_tiles = 10

            [[layout.ledges]]
            x = 400.0
            y = 500.0
            w = 300.0
            h = 20.0
            "#,
        )
        .unwrap();

        assert!(!config.window.vsync);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.params.gravity, 3.0);
        assert_eq!(config.params.max_speed, 20.0);
        assert_eq!(config.layout.floor_tiles, 10);
        assert_eq!(config.layout.ledges.len(), 1);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(GameConfig::from_toml_str("[params]\ngravity = \"heavy\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let missing = std::path::Path::new("/nonexistent/manlab.toml");
        assert!(GameConfig::load(Some(missing)).is_err());
    }
}
