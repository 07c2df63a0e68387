//! Pet stats, rooms and the pet-screen layout
//!
//! All three stats live in [0, 100]. Every mutation goes through `clamp_stat`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{LevelProgression, XpLadder};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::PetTuning;
use crate::{clamp_stat, pet_center};

/// Rooms of the hive. Only the bathroom enables grooming and only the nest
/// can start a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Room {
    PollenStorage,
    Bathroom,
    #[default]
    Nest,
}

impl Room {
    pub const ALL: [Room; 3] = [Room::Bathroom, Room::PollenStorage, Room::Nest];

    pub fn label(self) -> &'static str {
        match self {
            Room::PollenStorage => "Pollen Storage",
            Room::Bathroom => "Bathroom",
            Room::Nest => "Nest",
        }
    }

    /// Navigation button for this room along the bottom edge
    pub fn nav_button(self) -> Rect {
        let slot = match self {
            Room::Bathroom => 0.0,
            Room::PollenStorage => 1.0,
            Room::Nest => 2.0,
        };
        let x = NAV_BUTTON_SPACING * (slot + 1.0) + NAV_BUTTON_WIDTH * slot;
        Rect::new(x, NAV_BUTTON_Y, NAV_BUTTON_WIDTH, NAV_BUTTON_HEIGHT)
    }

    /// Room whose navigation button contains `point`
    pub fn at_point(point: Vec2) -> Option<Room> {
        Room::ALL
            .into_iter()
            .find(|room| room.nav_button().contains_point(point))
    }
}

/// Action button below the pet ("Play!" in the nest, "Make" in pollen storage)
pub fn action_button() -> Rect {
    Rect::from_center(
        pet_center() + Vec2::new(0.0, ACTION_BUTTON_OFFSET_Y),
        ACTION_BUTTON_WIDTH,
        ACTION_BUTTON_HEIGHT,
    )
}

/// Grooming brush centered on the cursor
pub fn brush_probe(cursor: Vec2) -> Rect {
    Rect::from_center(cursor, BRUSH_WIDTH, BRUSH_HEIGHT)
}

/// On-screen body of every bee in a hive of the given level, left to right
pub fn pet_bounds(level: u8) -> Vec<Rect> {
    let offsets: &[f32] = match level {
        0 | 1 => &[0.0],
        2 => &[-PET_SPACING, PET_SPACING],
        _ => &[-PET_SPACING, 0.0, PET_SPACING],
    };
    offsets
        .iter()
        .map(|&dx| Rect::from_center(pet_center() + Vec2::new(dx, 0.0), PET_BODY_WIDTH, PET_BODY_HEIGHT))
        .collect()
}

/// What one decay step took away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayStep {
    pub cleanliness: f32,
    pub hunger: f32,
    pub happiness: f32,
}

/// Persistent pet state (lives for the whole program run)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    cleanliness: f32,
    hunger: f32,
    happiness: f32,
    pub progression: LevelProgression,
}

impl PetState {
    /// Fresh pet: all stats full, level 1
    pub fn new(ladder: XpLadder) -> Self {
        Self {
            cleanliness: STAT_MAX,
            hunger: STAT_MAX,
            happiness: STAT_MAX,
            progression: LevelProgression::new(ladder),
        }
    }

    pub fn with_stats(mut self, cleanliness: f32, hunger: f32, happiness: f32) -> Self {
        self.cleanliness = clamp_stat(cleanliness);
        self.hunger = clamp_stat(hunger);
        self.happiness = clamp_stat(happiness);
        self
    }

    pub fn cleanliness(&self) -> f32 {
        self.cleanliness
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn happiness(&self) -> f32 {
        self.happiness
    }

    pub fn level(&self) -> u8 {
        self.progression.level()
    }

    /// Apply one decay step. Happiness loss grows with how neglected the pet is.
    pub fn decay(&mut self, tuning: &PetTuning) -> DecayStep {
        let before = (self.cleanliness, self.hunger, self.happiness);

        self.cleanliness = clamp_stat(self.cleanliness - tuning.cleanliness_decay);
        self.hunger = clamp_stat(self.hunger - tuning.hunger_decay);

        let deficit = (STAT_MAX - self.cleanliness) + (STAT_MAX - self.hunger);
        let divisor = tuning.happiness_divisor.max(1.0);
        let happiness_loss = (deficit / divisor).floor().max(1.0);
        self.happiness = clamp_stat(self.happiness - happiness_loss);

        DecayStep {
            cleanliness: before.0 - self.cleanliness,
            hunger: before.1 - self.hunger,
            happiness: before.2 - self.happiness,
        }
    }

    /// Brush the pet: raise cleanliness once if the probe touches any bee.
    ///
    /// Returns whether the probe hit a bee.
    pub fn hover_clean(&mut self, probe: &Rect, tuning: &PetTuning) -> bool {
        let hit = pet_bounds(self.level()).iter().any(|bee| probe.intersects(bee));
        if hit {
            self.cleanliness = clamp_stat(self.cleanliness + tuning.clean_rate);
        }
        hit
    }

    /// Fill the honey bar
    pub fn feed(&mut self) {
        self.hunger = STAT_MAX;
        log::info!("Fed! Honey: {}", self.hunger as i32);
    }

    /// Raise happiness, capped at the stat maximum
    pub fn cheer(&mut self, amount: f32) -> f32 {
        let before = self.happiness;
        self.happiness = clamp_stat(self.happiness + amount);
        self.happiness - before
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(XpLadder::default())
    }
}

/// Gate for interval-based decay: fires at most one step per check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatDecayScheduler {
    last_decay_ms: u64,
}

impl StatDecayScheduler {
    pub fn new(last_decay_ms: u64) -> Self {
        Self { last_decay_ms }
    }

    pub fn last_decay_ms(&self) -> u64 {
        self.last_decay_ms
    }

    /// Decay `pet` once if at least one interval elapsed since the last step.
    ///
    /// Missed intervals are not caught up.
    pub fn update(&mut self, pet: &mut PetState, now_ms: u64, tuning: &PetTuning) -> Option<DecayStep> {
        if now_ms.saturating_sub(self.last_decay_ms) < tuning.decay_interval_ms {
            return None;
        }
        let step = pet.decay(tuning);
        self.last_decay_ms = now_ms;
        log::debug!(
            "Decay: clean={:.1} honey={:.1} happy={:.1}",
            pet.cleanliness(),
            pet.hunger(),
            pet.happiness()
        );
        Some(step)
    }
}
