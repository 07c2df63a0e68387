//! Per-frame render snapshot
//!
//! An owned copy of everything a renderer needs. Built from the controller
//! after each tick; the renderer cannot reach back into simulation state.

use glam::Vec2;
use serde::Serialize;

use super::facts::FactProvider;
use super::mode::{Mode, ModeController, RoundSummary};
use super::pet::{Room, pet_bounds};
use super::rect::Rect;
use super::state::{GameSession, RoundPhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSnapshot {
    pub cleanliness: f32,
    pub hunger: f32,
    pub happiness: f32,
    pub level: u8,
    pub max_level: u8,
    pub xp_current: u32,
    /// `None` once the hive is at max level
    pub xp_next_level: Option<u32>,
    /// Body of every bee, for drawing and cursor feedback
    pub bees: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleSnapshot {
    pub top_segment: Rect,
    pub bottom_segment: Rect,
    pub top_head: Vec2,
    pub bottom_head: Vec2,
    pub head_radius: f32,
    pub palette_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub actor: Rect,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub phase: RoundPhase,
    pub fact: Option<String>,
}

impl RoundSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            actor: session.actor.bounds(),
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleSnapshot {
                    top_segment: o.top_segment(),
                    bottom_segment: o.bottom_segment(session.field_height),
                    top_head: o.top_head(),
                    bottom_head: o.bottom_head(),
                    head_radius: o.head_radius,
                    palette_index: o.palette_index,
                })
                .collect(),
            score: session.score,
            phase: session.phase,
            fact: session.fact.clone(),
        }
    }
}

/// Everything visible this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub now_ms: u64,
    pub pet: PetSnapshot,
    /// `None` while a round is running
    pub room: Option<Room>,
    pub cursor: Option<Vec2>,
    pub round: Option<RoundSnapshot>,
    pub last_round: Option<RoundSummary>,
}

impl FrameSnapshot {
    pub fn capture<F: FactProvider>(ctrl: &ModeController<F>) -> Self {
        let pet = ctrl.pet();
        let progression = &pet.progression;
        let (room, round) = match ctrl.mode() {
            Mode::Pet(pet_mode) => (Some(pet_mode.room), None),
            Mode::Flappy(flappy) => (None, Some(RoundSnapshot::from_session(&flappy.session))),
        };

        Self {
            now_ms: ctrl.now_ms(),
            pet: PetSnapshot {
                cleanliness: pet.cleanliness(),
                hunger: pet.hunger(),
                happiness: pet.happiness(),
                level: progression.level(),
                max_level: progression.max_level(),
                xp_current: progression.xp_current(),
                xp_next_level: progression.xp_next_level(),
                bees: pet_bounds(progression.level()),
            },
            room,
            cursor: ctrl.cursor(),
            round,
            last_round: ctrl.last_round().cloned(),
        }
    }

    /// JSON form for external renderers and logs
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
