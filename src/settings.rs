//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{GameState, Playfield};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "settings I/O failed: {}", e),
            Self::Parse(e) => write!(f, "settings are not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Fixed run seed; None picks one from the clock
    pub seed: Option<u64>,
    /// Asteroids spawned per level number
    pub asteroids_per_level: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            seed: None,
            asteroids_per_level: 1,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Playfield with non-positive or non-finite sizes replaced by defaults
    pub fn playfield(&self) -> Playfield {
        let sane = |v: f32, fallback: f32| if v.is_finite() && v > 1.0 { v } else { fallback };
        Playfield::new(
            sane(self.playfield_width, PLAYFIELD_WIDTH),
            sane(self.playfield_height, PLAYFIELD_HEIGHT),
        )
    }

    /// A run on the title screen, seeded from the settings or `fallback_seed`
    pub fn new_game(&self, fallback_seed: u64) -> GameState {
        let seed = self.seed.unwrap_or(fallback_seed);
        log::info!("New run with seed {}", seed);
        GameState::new(seed, self.playfield()).with_asteroids_per_level(self.asteroids_per_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 99, "asteroids_per_level": 2 }"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.asteroids_per_level, 2);
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ nope").expect_err("invalid");
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("rock-arena-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(5),
            muted: true,
            ..Default::default()
        };
        settings.save_to(&path).expect("writable temp dir");
        let loaded = Settings::load_from(&path).expect("readable");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_new_game_applies_settings() {
        let settings = Settings {
            seed: Some(17),
            playfield_width: -5.0,
            asteroids_per_level: 3,
            ..Default::default()
        };
        let state = settings.new_game(0);
        assert_eq!(state.seed, 17);
        assert_eq!(state.playfield.width, PLAYFIELD_WIDTH);
        assert_eq!(state.asteroids_per_level, 3);
    }
}
