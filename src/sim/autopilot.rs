//! Idle/demo player for the mini-game
//!
//! Steers toward the middle of the next gap by jumping whenever the bee sinks
//! below it. Good enough to show a round off, not to win one.

use super::state::GameSession;
use crate::platform::InputEvent;
use crate::settings::FlappyTuning;

/// How far below the target the bee may sink before jumping
const JUMP_SLACK: f32 = 12.0;

/// Height the bee should aim for this tick
pub fn target_height(session: &GameSession) -> f32 {
    let actor_left = session.actor.bounds().left();
    session
        .obstacles
        .iter()
        .find(|o| o.right() >= actor_left)
        .map(|o| o.gap_top + o.gap_size / 2.0 + JUMP_SLACK)
        .unwrap_or(session.field_height / 2.0)
}

/// Input the autopilot wants to send this tick
pub fn autopilot(session: &GameSession, tuning: &FlappyTuning) -> Option<InputEvent> {
    if !session.is_active() {
        return None;
    }
    let actor = &session.actor;
    // Predict where gravity takes the bee next tick
    let next_y = actor.y + actor.vel_y + tuning.gravity;
    let falling = actor.vel_y >= 0.0;
    (falling && next_y > target_height(session) + JUMP_SLACK).then_some(InputEvent::JumpPressed)
}
