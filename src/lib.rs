//! Buzz Buddy - a virtual bee pet with a flappy flower mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pet stats, leveling, mini-game rounds, mode FSM)
//! - `platform`: Frame clock and abstracted input events
//! - `settings`: Data-driven game balance and runner configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{FlappyTuning, PetTuning, Settings, SettingsError, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed frame rate of the simulation loop
    pub const FRAME_RATE: u32 = 60;

    /// Playfield dimensions (shared by pet and mini-game screens)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Stat bounds
    pub const STAT_MIN: f32 = 0.0;
    pub const STAT_MAX: f32 = 100.0;

    /// Pet layout - the bee(s) are drawn around this point
    pub const PET_CENTER_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PET_CENTER_Y: f32 = SCREEN_HEIGHT / 2.0 - 30.0;
    pub const PET_BODY_WIDTH: f32 = 80.0;
    pub const PET_BODY_HEIGHT: f32 = 60.0;
    /// Horizontal distance between bees once the hive grows
    pub const PET_SPACING: f32 = PET_BODY_WIDTH * 0.7;

    /// Grooming brush that follows the cursor in the bathroom
    pub const BRUSH_WIDTH: f32 = 35.0;
    pub const BRUSH_HEIGHT: f32 = 45.0;

    /// Action button under the pet (Play in the nest, Make in pollen storage)
    pub const ACTION_BUTTON_WIDTH: f32 = 150.0;
    pub const ACTION_BUTTON_HEIGHT: f32 = 50.0;
    pub const ACTION_BUTTON_OFFSET_Y: f32 = PET_BODY_HEIGHT / 2.0 + 80.0;

    /// Room navigation buttons along the bottom edge
    pub const NAV_BUTTON_WIDTH: f32 = 110.0;
    pub const NAV_BUTTON_HEIGHT: f32 = 40.0;
    pub const NAV_BUTTON_Y: f32 = SCREEN_HEIGHT - NAV_BUTTON_HEIGHT - 15.0;
    pub const NAV_BUTTON_SPACING: f32 = 17.0; // (400 - 110 * 3) / 4, floored

    /// Mini-game bee: fixed column, scaled-down body
    pub const FLAPPY_BEE_X: f32 = SCREEN_WIDTH / 4.0;
    pub const FLAPPY_BEE_SCALE: f32 = 0.6;
    pub const FLAPPY_BEE_WIDTH: f32 = PET_BODY_WIDTH * FLAPPY_BEE_SCALE;
    pub const FLAPPY_BEE_HEIGHT: f32 = PET_BODY_HEIGHT * FLAPPY_BEE_SCALE;
}

/// Milliseconds covered by `frames` ticks at the given frame rate
#[inline]
pub fn frames_to_ms(frames: u64, frame_rate: u32) -> u64 {
    frames * 1000 / frame_rate.max(1) as u64
}

/// Clamp a stat into its legal range
#[inline]
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(consts::STAT_MIN, consts::STAT_MAX)
}

/// Center of the pet area on the pet screen
#[inline]
pub fn pet_center() -> Vec2 {
    Vec2::new(consts::PET_CENTER_X, consts::PET_CENTER_Y)
}
