use super::{gameplay::GameplayConfig, rendering::RenderConfig, scene::SceneConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "viewer.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub log_level: LevelFilter,
    pub render: RenderConfig,
    pub gameplay: GameplayConfig,
    pub scene: SceneConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            render: RenderConfig::default(),
            gameplay: GameplayConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {:?}", path))
    }

    /// First existing config file: working directory, then the user config directory.
    pub fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        user_config_path().filter(|path| path.is_file())
    }

    /// Loads the located config file, or the defaults when there is none.
    /// The file is never created or written.
    pub fn load_or_default() -> Result<(Self, Option<PathBuf>)> {
        match Self::locate() {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "MetroManDevTeam", "eyeball-viewer")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = ViewerConfig::from_toml("").unwrap();
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.render.width, 1024);
        assert_eq!(config.render.height, 768);
        assert_eq!(config.render.title, "Eyeball Viewer");
        assert_eq!(config.gameplay.footprint_limit, 29.5);
        assert_eq!(config.scene.collision_radius(), 2.5);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = ViewerConfig::from_toml(
            r#"
            log_level = "DEBUG"

            [render]
            width = 1280
            vsync = false

            [scene]
            eyeball_position = [1.0, -5.0, 2.0]
            bulb_offsets = [0.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.render.width, 1280);
        assert_eq!(config.render.height, 768);
        assert!(!config.render.vsync);
        assert_eq!(config.scene.eyeball_position, Vec3::new(1.0, -5.0, 2.0));
        assert_eq!(config.scene.bulb_offsets, vec![0.0]);
        assert_eq!(config.scene.eyeball_scale, 0.8);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        assert!(ViewerConfig::from_toml("[render]\nwidth = \"wide\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gameplay]\nplayer_speed = 4.0").unwrap();

        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.gameplay.player_speed, 4.0);
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&ViewerConfig::default()).unwrap();
        let config = ViewerConfig::from_toml(&text).unwrap();
        assert_eq!(config.scene.face_colors, SceneConfig::default().face_colors);
        assert_eq!(config.scene.model_path, SceneConfig::default().model_path);
    }
}
