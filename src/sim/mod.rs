//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as a millisecond timestamp per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond abstract input events

pub mod autopilot;
pub mod collision;
pub mod facts;
pub mod level;
pub mod mode;
pub mod pet;
pub mod rect;
pub mod score;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{CollisionKind, detect_collision};
pub use facts::{BEE_FACTS, FactProvider, RandomFacts};
pub use level::{LevelProgression, XpLadder};
pub use mode::{FlappyMode, Flow, Mode, ModeController, PetMode, RoundSummary};
pub use pet::{DecayStep, PetState, Room, StatDecayScheduler};
pub use rect::Rect;
pub use score::score_passed_obstacles;
pub use snapshot::{FrameSnapshot, ObstacleSnapshot, PetSnapshot, RoundSnapshot};
pub use spawner::ObstacleSpawner;
pub use state::{Actor, GameSession, Obstacle, RoundPhase};
pub use tick::{RoundTick, tick};
