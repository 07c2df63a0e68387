//! Once-per-flower scoring

use super::state::Obstacle;

/// Award a point for every unscored flower whose center has passed `actor_x`.
///
/// The `scored` flag guarantees a flower never pays out twice.
pub fn score_passed_obstacles(obstacles: &mut [Obstacle], actor_x: f32) -> u32 {
    let mut points = 0;
    for obstacle in obstacles.iter_mut().filter(|o| !o.scored) {
        if obstacle.center_x() < actor_x {
            obstacle.scored = true;
            points += 1;
        }
    }
    points
}
