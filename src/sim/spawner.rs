//! Periodic flower spawning
//!
//! Flowers appear on a fixed wall-clock period while a round is active. The
//! gap position comes from an injected RNG so runs are reproducible per seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::settings::FlappyTuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    last_spawn_ms: u64,
    next_palette: u8,
    palette_size: u8,
    next_id: u32,
}

impl ObstacleSpawner {
    /// Spawner whose first flower is due one interval after `now_ms`
    pub fn new(now_ms: u64, palette_size: u8) -> Self {
        Self {
            last_spawn_ms: now_ms,
            next_palette: 0,
            palette_size: palette_size.max(1),
            next_id: 1,
        }
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    /// Whether a spawn is due at `now_ms`
    pub fn is_due(&self, now_ms: u64, tuning: &FlappyTuning) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms) >= tuning.spawn_interval_ms
    }

    /// Spawn at most one flower if the period elapsed. Late ticks do not catch up.
    pub fn update<R: Rng>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
        tuning: &FlappyTuning,
        field_width: f32,
        field_height: f32,
    ) -> Option<Obstacle> {
        if !self.is_due(now_ms, tuning) {
            return None;
        }
        self.last_spawn_ms = now_ms;
        Some(self.spawn(rng, tuning, field_width, field_height))
    }

    /// Build the next flower just past the right edge with a random gap
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        tuning: &FlappyTuning,
        field_width: f32,
        field_height: f32,
    ) -> Obstacle {
        let (lo, hi) = tuning.gap_top_range(field_height);
        let gap_top = rng.random_range(lo..=hi).clamp(lo, hi);

        let obstacle = Obstacle {
            id: self.next_id,
            x: field_width + tuning.stem_width / 2.0,
            gap_top,
            gap_size: tuning.gap_size,
            stem_width: tuning.stem_width,
            head_radius: tuning.head_radius,
            scored: false,
            palette_index: self.next_palette,
        };

        self.next_id += 1;
        self.next_palette = (self.next_palette + 1) % self.palette_size;

        log::debug!(
            "Spawned flower {} with gap {:.0}..{:.0}",
            obstacle.id,
            obstacle.gap_top,
            obstacle.gap_bottom()
        );
        obstacle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_waits_for_interval() {
        let tuning = FlappyTuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = ObstacleSpawner::new(1000, tuning.palette_size);

        assert!(spawner.update(2499, &mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).is_none());
        let first = spawner.update(2500, &mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT);
        assert!(first.is_some());
        assert_eq!(spawner.last_spawn_ms(), 2500);
        assert!(spawner.update(2501, &mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).is_none());
    }

    #[test]
    fn test_late_tick_spawns_once() {
        let tuning = FlappyTuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = ObstacleSpawner::new(0, tuning.palette_size);

        assert!(spawner.update(10_000, &mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).is_some());
        assert!(spawner.update(10_016, &mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).is_none());
    }

    #[test]
    fn test_spawn_position_and_flags() {
        let tuning = FlappyTuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = ObstacleSpawner::new(0, tuning.palette_size);
        let obstacle = spawner.spawn(&mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT);

        assert_eq!(obstacle.x, 407.5);
        assert!(!obstacle.scored);
        assert_eq!(obstacle.id, 1);
        assert_eq!(obstacle.gap_size, 180.0);
    }

    #[test]
    fn test_palette_cycles() {
        let tuning = FlappyTuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut spawner = ObstacleSpawner::new(0, tuning.palette_size);
        let palette: Vec<u8> = (0..7)
            .map(|_| spawner.spawn(&mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).palette_index)
            .collect();
        assert_eq!(palette, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let tuning = FlappyTuning::default();
        let gaps = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut spawner = ObstacleSpawner::new(0, tuning.palette_size);
            (0..5)
                .map(|_| spawner.spawn(&mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT).gap_top)
                .collect::<Vec<_>>()
        };
        assert_eq!(gaps(42), gaps(42));
    }

    proptest! {
        #[test]
        fn prop_gap_within_margins(seed in any::<u64>()) {
            let tuning = FlappyTuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut spawner = ObstacleSpawner::new(0, tuning.palette_size);
            for _ in 0..20 {
                let o = spawner.spawn(&mut rng, &tuning, SCREEN_WIDTH, SCREEN_HEIGHT);
                prop_assert!(o.gap_top >= tuning.min_margin);
                prop_assert!(o.gap_top + o.gap_size <= SCREEN_HEIGHT - tuning.min_margin);
            }
        }
    }
}
