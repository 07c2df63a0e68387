//! Collision detection for the mini-game
//!
//! Three tests, any of which ends the round:
//! - bee body vs. stem rectangles
//! - bee center vs. circular flower heads
//! - bee body vs. ceiling and floor

use glam::Vec2;

use super::rect::Rect;
use super::state::{Actor, Obstacle};

/// What the bee hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Stem { obstacle_id: u32 },
    Head { obstacle_id: u32 },
    Ceiling,
    Floor,
}

/// Strict rectangle overlap between the bee and a stem
#[inline]
pub fn actor_segment_collision(actor: &Rect, segment: &Rect) -> bool {
    actor.intersects(segment)
}

/// Circle test between the bee center and a flower head (touching counts)
#[inline]
pub fn actor_head_collision(center: Vec2, actor_radius: f32, head: Vec2, head_radius: f32) -> bool {
    center.distance(head) <= actor_radius + head_radius
}

/// Whether the bee touches the ceiling or the floor
pub fn actor_bounds_collision(actor: &Rect, field_height: f32) -> Option<CollisionKind> {
    if actor.top() <= 0.0 {
        Some(CollisionKind::Ceiling)
    } else if actor.bottom() >= field_height {
        Some(CollisionKind::Floor)
    } else {
        None
    }
}

/// Check the bee against one flower pair
pub fn actor_obstacle_collision(actor: &Actor, obstacle: &Obstacle, field_height: f32) -> Option<CollisionKind> {
    let bounds = actor.bounds();
    let obstacle_id = obstacle.id;

    if actor_segment_collision(&bounds, &obstacle.top_segment())
        || actor_segment_collision(&bounds, &obstacle.bottom_segment(field_height))
    {
        return Some(CollisionKind::Stem { obstacle_id });
    }

    let center = actor.center();
    let radius = actor.radius();
    if actor_head_collision(center, radius, obstacle.top_head(), obstacle.head_radius)
        || actor_head_collision(center, radius, obstacle.bottom_head(), obstacle.head_radius)
    {
        return Some(CollisionKind::Head { obstacle_id });
    }

    None
}

/// OR of every test for this tick. Returns the first hit found.
pub fn detect_collision(actor: &Actor, obstacles: &[Obstacle], field_height: f32) -> Option<CollisionKind> {
    obstacles
        .iter()
        .find_map(|obstacle| actor_obstacle_collision(actor, obstacle, field_height))
        .or_else(|| actor_bounds_collision(&actor.bounds(), field_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::FlappyTuning;

    fn obstacle_at(x: f32, gap_top: f32) -> Obstacle {
        let tuning = FlappyTuning::default();
        Obstacle {
            id: 7,
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
    fn test_clear_flight() {
        let actor = Actor::default();
        let far = obstacle_at(300.0, 200.0);
        assert_eq!(detect_collision(&actor, &[far], SCREEN_HEIGHT), None);
    }

    #[test]
    fn test_inside_gap_away_from_heads() {
        // Gap 200..380, bee centered at 290: 90px from each head center
        let mut actor = Actor::default();
        actor.y = 290.0;
        let o = obstacle_at(actor.x - 7.5, 200.0);
        assert_eq!(detect_collision(&actor, &[o], SCREEN_HEIGHT), None);
    }

    #[test]
    fn test_stem_hit() {
        let actor = Actor::default();
        // Gap 400..580: bee at y=300 is inside the upper stem
        let o = obstacle_at(actor.x - 7.5, 400.0);
        assert_eq!(
            detect_collision(&actor, &[o], SCREEN_HEIGHT),
            Some(CollisionKind::Stem { obstacle_id: 7 })
        );
    }

    #[test]
    fn test_head_hit_before_stem() {
        let actor = Actor::default();
        // Stem starts 10px past the bee's right edge; the head reaches back over it
        let o = obstacle_at(actor.bounds().right() + 10.0, 300.0);
        assert!(!actor.bounds().intersects(&o.top_segment()));
        assert_eq!(
            detect_collision(&actor, &[o], SCREEN_HEIGHT),
            Some(CollisionKind::Head { obstacle_id: 7 })
        );
    }

    #[test]
    fn test_head_touching_counts() {
        let center = Vec2::new(0.0, 0.0);
        assert!(actor_head_collision(center, 24.0, Vec2::new(59.0, 0.0), 35.0));
        assert!(!actor_head_collision(center, 24.0, Vec2::new(59.5, 0.0), 35.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let mut actor = Actor::default();
        actor.y = actor.height / 2.0;
        assert_eq!(detect_collision(&actor, &[], SCREEN_HEIGHT), Some(CollisionKind::Ceiling));

        actor.y = SCREEN_HEIGHT - actor.height / 2.0;
        assert_eq!(detect_collision(&actor, &[], SCREEN_HEIGHT), Some(CollisionKind::Floor));

        actor.y = SCREEN_HEIGHT / 2.0;
        assert_eq!(detect_collision(&actor, &[], SCREEN_HEIGHT), None);
    }

    #[test]
    fn test_any_obstacle_counts() {
        let actor = Actor::default();
        let safe = obstacle_at(350.0, 200.0);
        let hit = obstacle_at(actor.x - 7.5, 400.0);
        assert!(detect_collision(&actor, &[safe, hit], SCREEN_HEIGHT).is_some());
    }
}
