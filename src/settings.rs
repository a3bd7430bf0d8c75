//! Game settings and preferences
//!
//! Persisted separately from high scores as a small JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute everything (toggled by the mute key)
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Visual effects ===
    /// Particle effects on brick breaks
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            show_fps: false,
            particles: true,
        }
    }
}

impl Settings {
    /// Flip the mute state (the mute-toggle input)
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Effective sound-effect gain after mute and master volume
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music gain after mute and master volume
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Load from disk, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("corrupt settings file {} ({err}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save to disk; failures are logged and otherwise ignored
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save settings to {} ({err})", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings ({err})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_silences_effective_volumes() {
        let mut settings = Settings::default();
        assert!(settings.effective_sfx_volume() > 0.0);
        settings.toggle_mute();
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
        settings.toggle_mute();
        assert!(settings.effective_music_volume() > 0.0);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let path =
            std::env::temp_dir().join(format!("star-breaker-settings-{}", std::process::id()));
        let mut settings = Settings::default();
        settings.muted = true;
        settings.show_fps = true;
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        fs::remove_file(&path).ok();
    }
}
