//! Mini-game round state
//!
//! A `GameSession` lives for exactly one round: created when the round starts,
//! dropped once the player confirms the round-over screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner::ObstacleSpawner;
use crate::consts::*;
use crate::settings::FlappyTuning;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Physics, spawning and scoring run every tick
    Active,
    /// Collision happened; waiting for the player to confirm
    Over,
}

/// The player's bee. Horizontal position never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Actor {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vel_y: 0.0,
            width: FLAPPY_BEE_WIDTH,
            height: FLAPPY_BEE_HEIGHT,
        }
    }

    /// Semi-explicit Euler step: gravity first, then position. No terminal velocity.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.y += self.vel_y;
    }

    /// Jumps replace the current velocity rather than adding to it
    pub fn jump(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.center(), self.width, self.height)
    }

    /// Radius used against flower heads
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(FLAPPY_BEE_X, SCREEN_HEIGHT / 2.0)
    }
}

/// A flower pair: top stem hanging from the ceiling, bottom stem rising from
/// the floor, with a flower head at each stem tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge of both stems
    pub x: f32,
    /// Top of the gap (bottom tip of the upper stem)
    pub gap_top: f32,
    pub gap_size: f32,
    pub stem_width: f32,
    pub head_radius: f32,
    /// Set once the flower passes the bee
    pub scored: bool,
    /// Petal color, cycles through the palette
    pub palette_index: u8,
}

impl Obstacle {
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_size
    }

    /// Horizontal reference used for scoring and head placement
    pub fn center_x(&self) -> f32 {
        self.x + self.stem_width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.stem_width
    }

    pub fn top_segment(&self) -> Rect {
        Rect::new(self.x, 0.0, self.stem_width, self.gap_top)
    }

    pub fn bottom_segment(&self, field_height: f32) -> Rect {
        let bottom = self.gap_bottom();
        Rect::new(self.x, bottom, self.stem_width, field_height - bottom)
    }

    pub fn top_head(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.gap_top)
    }

    pub fn bottom_head(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.gap_bottom())
    }

    pub fn scroll(&mut self, dx: f32) {
        self.x -= dx;
    }

    /// Fully past the left edge, heads included
    pub fn is_offscreen(&self) -> bool {
        self.right() < -self.head_radius
    }
}

/// One mini-game round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    pub phase: RoundPhase,
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: ObstacleSpawner,
    /// Simulation tick counter for this round
    pub time_ticks: u64,
    /// Round start (wall clock)
    pub started_ms: u64,
    /// Fact chosen once when the round ends
    pub fact: Option<String>,
    pub field_width: f32,
    pub field_height: f32,
}

impl GameSession {
    /// Start a new round at `now_ms`
    pub fn new(now_ms: u64, tuning: &FlappyTuning) -> Self {
        Self {
            score: 0,
            phase: RoundPhase::Active,
            actor: Actor::default(),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(now_ms, tuning.palette_size),
            time_ticks: 0,
            started_ms: now_ms,
            fact: None,
            field_width: SCREEN_WIDTH,
            field_height: SCREEN_HEIGHT,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Apply a jump; ignored once the round is over
    pub fn jump(&mut self, tuning: &FlappyTuning) {
        if self.is_active() {
            self.actor.jump(tuning.jump_impulse);
        }
    }

    /// Enter the round-over state. Returns false if the round had already ended.
    pub fn end(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = RoundPhase::Over;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, gap_top: f32) -> Obstacle {
        let tuning = FlappyTuning::default();
        Obstacle {
            id: 1,
            x,
            gap_top,
            gap_size: tuning.gap_size,
            stem_width: tuning.stem_width,
            head_radius: tuning.head_radius,
            scored: false,
            palette_index: 0,
        }
    }

    #[test]
    fn test_actor_integrate() {
        let mut actor = Actor::default();
        actor.integrate(0.25);
        assert_eq!(actor.vel_y, 0.25);
        assert_eq!(actor.y, 300.25);
        actor.integrate(0.25);
        assert_eq!(actor.vel_y, 0.5);
        assert_eq!(actor.y, 300.75);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut actor = Actor::default();
        actor.vel_y = 9.0;
        actor.jump(-6.0);
        assert_eq!(actor.vel_y, -6.0);
        actor.vel_y = -20.0;
        actor.jump(-6.0);
        assert_eq!(actor.vel_y, -6.0);
    }

    #[test]
    fn test_no_terminal_velocity() {
        let mut actor = Actor::default();
        for _ in 0..1000 {
            actor.integrate(0.25);
        }
        assert_eq!(actor.vel_y, 250.0);
    }

    #[test]
    fn test_actor_bounds() {
        let actor = Actor::default();
        let bounds = actor.bounds();
        assert_eq!(bounds.size, Vec2::new(48.0, 36.0));
        assert_eq!(bounds.center(), Vec2::new(100.0, 300.0));
        assert_eq!(actor.radius(), 24.0);
    }

    #[test]
    fn test_obstacle_geometry() {
        let o = obstacle(407.0, 100.0);
        assert_eq!(o.top_segment(), Rect::new(407.0, 0.0, 15.0, 100.0));
        assert_eq!(o.bottom_segment(600.0), Rect::new(407.0, 280.0, 15.0, 320.0));
        assert_eq!(o.top_head(), Vec2::new(414.5, 100.0));
        assert_eq!(o.bottom_head(), Vec2::new(414.5, 280.0));
    }

    #[test]
    fn test_obstacle_offscreen() {
        let mut o = obstacle(0.0, 100.0);
        o.scroll(50.0);
        // right = -35, not yet strictly past -35
        assert!(!o.is_offscreen());
        o.scroll(1.0);
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_session_end_once() {
        let tuning = FlappyTuning::default();
        let mut session = GameSession::new(0, &tuning);
        assert!(session.is_active());
        assert!(session.end());
        assert!(!session.end());
        assert!(session.is_over());
    }

    #[test]
    fn test_jump_ignored_when_over() {
        let tuning = FlappyTuning::default();
        let mut session = GameSession::new(0, &tuning);
        session.end();
        session.jump(&tuning);
        assert_eq!(session.actor.vel_y, 0.0);
    }
}
