//! Game balance and runner settings
//!
//! Loaded from a JSON file; every field falls back to the built-in balance.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while reading a settings file
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pet-side balance: decay, grooming, round rewards, XP ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetTuning {
    /// Minimum time between two decay steps
    pub decay_interval_ms: u64,
    /// Cleanliness lost per decay step
    pub cleanliness_decay: f32,
    /// Hunger (honey) lost per decay step
    pub hunger_decay: f32,
    /// Happiness loss is `deficit / happiness_divisor`, at least 1
    pub happiness_divisor: f32,
    /// Cleanliness gained per frame while the brush hovers a bee
    pub clean_rate: f32,
    /// XP gained per point scored in a round
    pub xp_per_point: u32,
    /// Happiness gained per point scored in a round
    pub happiness_per_point: f32,
    /// XP needed to leave level 1, level 2, ... (last level has no entry)
    pub xp_thresholds: Vec<u32>,
}

impl Default for PetTuning {
    fn default() -> Self {
        Self {
            decay_interval_ms: 5000,
            cleanliness_decay: 2.0,
            hunger_decay: 4.0,
            happiness_divisor: 20.0,
            clean_rate: 0.5,
            xp_per_point: 1,
            happiness_per_point: 0.5,
            xp_thresholds: vec![50, 100],
        }
    }
}

/// Mini-game balance: physics, obstacle timing and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyTuning {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    /// Horizontal scroll per tick
    pub obstacle_speed: f32,
    /// Time between two obstacle spawns
    pub spawn_interval_ms: u64,
    /// Vertical gap between the two stems
    pub gap_size: f32,
    /// Radius of the flower head at each stem tip
    pub head_radius: f32,
    /// Stem width
    pub stem_width: f32,
    /// Gap may not come closer than this to either playfield edge
    pub min_margin: f32,
    /// Number of petal colors cycled by consecutive obstacles
    pub palette_size: u8,
}

impl Default for FlappyTuning {
    fn default() -> Self {
        let head_radius = 35.0;
        Self {
            gravity: 0.25,
            jump_impulse: -6.0,
            obstacle_speed: 3.0,
            spawn_interval_ms: 1500,
            gap_size: 180.0,
            head_radius,
            stem_width: 15.0,
            min_margin: head_radius + 50.0,
            palette_size: 3,
        }
    }
}

impl FlappyTuning {
    /// Inclusive range of legal `gap_top` values for a playfield of `height`.
    ///
    /// Collapses to the lowest legal value when the gap cannot fit.
    pub fn gap_top_range(&self, height: f32) -> (f32, f32) {
        let lo = self.min_margin;
        let hi = height - self.min_margin - self.gap_size;
        (lo, hi.max(lo))
    }
}

/// All gameplay balance knobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pet: PetTuning,
    pub flappy: FlappyTuning,
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; derived from the system clock when absent
    pub seed: Option<u64>,
    /// Simulation frames per second
    pub frame_rate: u32,
    /// Sleep between frames to run at wall-clock speed
    pub realtime: bool,
    /// Number of frames the headless demo runs for
    pub demo_frames: u64,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: FRAME_RATE,
            realtime: false,
            demo_frames: 60 * 90,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Seed to use for this run
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Milliseconds per frame at the configured rate
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.frame_rate.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pet.decay_interval_ms, 5000);
        assert_eq!(tuning.pet.xp_thresholds, vec![50, 100]);
        assert_eq!(tuning.flappy.spawn_interval_ms, 1500);
        assert_eq!(tuning.flappy.min_margin, 85.0);
    }

    #[test]
    fn test_gap_top_range() {
        let flappy = FlappyTuning::default();
        let (lo, hi) = flappy.gap_top_range(SCREEN_HEIGHT);
        assert_eq!(lo, 85.0);
        assert_eq!(hi, 335.0);
        assert!(hi + flappy.gap_size <= SCREEN_HEIGHT - flappy.min_margin);
    }

    #[test]
    fn test_gap_top_range_collapses_when_gap_too_big() {
        let flappy = FlappyTuning {
            gap_size: 1000.0,
            ..Default::default()
        };
        let (lo, hi) = flappy.gap_top_range(SCREEN_HEIGHT);
        assert_eq!(lo, hi);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "tuning": { "flappy": { "gravity": 0.5 } } }"#)
                .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.flappy.gravity, 0.5);
        assert_eq!(settings.tuning.flappy.jump_impulse, -6.0);
        assert_eq!(settings.tuning.pet, PetTuning::default());
        assert_eq!(settings.frame_rate, FRAME_RATE);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let err = Settings::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));

        let settings = Settings::load(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(settings, Settings::default());
    }
}
