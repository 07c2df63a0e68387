//! Fixed timestep round tick
//!
//! Advances one mini-game round by a single frame:
//! spawn -> physics -> scroll -> score -> collide -> cull.

use rand::Rng;

use super::collision::{CollisionKind, detect_collision};
use super::score::score_passed_obstacles;
use super::state::GameSession;
use crate::settings::FlappyTuning;

/// What happened during one round tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundTick {
    /// A flower was spawned this tick
    pub spawned: bool,
    /// Points scored this tick
    pub points: u32,
    /// Collision that ended the round this tick
    pub collision: Option<CollisionKind>,
}

impl RoundTick {
    /// Whether this tick ended the round
    pub fn ended(&self) -> bool {
        self.collision.is_some()
    }
}

/// Advance the round by one frame. A round that is over stays frozen.
pub fn tick<R: Rng>(
    session: &mut GameSession,
    now_ms: u64,
    rng: &mut R,
    tuning: &FlappyTuning,
) -> RoundTick {
    let mut result = RoundTick::default();
    if !session.is_active() {
        return result;
    }

    session.time_ticks += 1;

    if let Some(obstacle) =
        session
            .spawner
            .update(now_ms, rng, tuning, session.field_width, session.field_height)
    {
        session.obstacles.push(obstacle);
        result.spawned = true;
    }

    session.actor.integrate(tuning.gravity);

    for obstacle in &mut session.obstacles {
        obstacle.scroll(tuning.obstacle_speed);
    }

    result.points = score_passed_obstacles(&mut session.obstacles, session.actor.x);
    session.score += result.points;

    // Flowers leaving the screen this tick still count for collision
    result.collision = detect_collision(&session.actor, &session.obstacles, session.field_height);
    session.obstacles.retain(|o| !o.is_offscreen());

    if let Some(kind) = result.collision {
        if session.end() {
            log::info!("Game over! Final score: {} ({:?})", session.score, kind);
        }
    }

    result
}
