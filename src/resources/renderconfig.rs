//! Render configuration resource.
//!
//! Manages window and sprite rendering settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1000
//! height = 625
//! target_fps = 60
//!
//! [render]
//! stretch_out = true
//! cull = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1000;
const DEFAULT_WINDOW_HEIGHT: u32 = 625;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_STRETCH_OUT: bool = true;
const DEFAULT_CULL: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Render configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct RenderConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Stretch policy for sprites spawned by the demo scene that don't pick
    /// one themselves.
    pub stretch_out: bool,
    /// Skip primitives whose bounds fall outside the window.
    pub cull: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            stretch_out: DEFAULT_STRETCH_OUT,
            cull: DEFAULT_CULL,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [render] section
        if let Some(stretch_out) = config.getbool("render", "stretch_out").ok().flatten() {
            self.stretch_out = stretch_out;
        }
        if let Some(cull) = config.getbool("render", "cull").ok().flatten() {
            self.cull = cull;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, stretch_out={}, cull={}",
            self.window_width, self.window_height, self.target_fps, self.stretch_out, self.cull
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [render] section
        config.set("render", "stretch_out", Some(self.stretch_out.to_string()));
        config.set("render", "cull", Some(self.cull.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spritetile-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.window_size(), (1000, 625));
        assert_eq!(config.target_fps, 60);
        assert!(config.stretch_out);
        assert!(config.cull);
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = RenderConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1000, 625));
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[window]\nwidth = 640\n\n[render]\nstretch_out = false\n").unwrap();

        let mut config = RenderConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 625);
        assert!(!config.stretch_out);
        assert!(config.cull);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut config = RenderConfig::with_path(&path);
        config.window_width = 320;
        config.target_fps = 30;
        config.cull = false;
        config.save_to_file().unwrap();

        let mut loaded = RenderConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 320);
        assert_eq!(loaded.target_fps, 30);
        assert!(!loaded.cull);

        std::fs::remove_file(&path).ok();
    }
}
