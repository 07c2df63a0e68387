//! XP ladder and level progression
//!
//! The hive grows from one bee to `max_level` bees. Each level except the last
//! has an XP threshold; the last level is terminal and has no next threshold.

use serde::{Deserialize, Serialize};

/// Ordered XP thresholds: entry `i` is the XP needed to leave level `i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpLadder {
    thresholds: Vec<u32>,
}

impl XpLadder {
    pub fn new(thresholds: Vec<u32>) -> Self {
        Self { thresholds }
    }

    /// Highest reachable level (one past the last threshold)
    pub fn max_level(&self) -> u8 {
        (self.thresholds.len() + 1).min(u8::MAX as usize) as u8
    }

    /// XP required to advance from `level`, or `None` when `level` is terminal
    pub fn threshold(&self, level: u8) -> Option<u32> {
        if level == 0 || level >= self.max_level() {
            return None;
        }
        self.thresholds.get(level as usize - 1).copied()
    }
}

impl Default for XpLadder {
    fn default() -> Self {
        Self::new(vec![50, 100])
    }
}

/// Current level and XP toward the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProgression {
    level: u8,
    xp_current: u32,
    ladder: XpLadder,
}

impl LevelProgression {
    /// Start at level 1 with no XP
    pub fn new(ladder: XpLadder) -> Self {
        Self {
            level: 1,
            xp_current: 0,
            ladder,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn xp_current(&self) -> u32 {
        self.xp_current
    }

    pub fn max_level(&self) -> u8 {
        self.ladder.max_level()
    }

    pub fn ladder(&self) -> &XpLadder {
        &self.ladder
    }

    /// XP needed to leave the current level, `None` at max level
    pub fn xp_next_level(&self) -> Option<u32> {
        self.ladder.threshold(self.level)
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.ladder.max_level()
    }

    /// Add XP and climb as many levels as it pays for.
    ///
    /// Reaching max level discards any leftover XP. Returns the number of
    /// levels gained.
    pub fn apply_xp(&mut self, amount: u32) -> u8 {
        self.xp_current = self.xp_current.saturating_add(amount);

        let mut gained = 0;
        while let Some(threshold) = self.xp_next_level() {
            if self.xp_current < threshold {
                break;
            }
            self.xp_current -= threshold;
            self.level += 1;
            gained += 1;
            log::info!("Level up! Hive reached level {}", self.level);

            if self.is_max_level() {
                log::info!("Max hive level reached");
                self.xp_current = 0;
                break;
            }
        }
        gained
    }

    /// Fraction of the way to the next level, 1.0 at max level
    pub fn progress(&self) -> f32 {
        match self.xp_next_level() {
            Some(0) => 1.0,
            Some(threshold) => (self.xp_current as f32 / threshold as f32).min(1.0),
            None => 1.0,
        }
    }
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new(XpLadder::default())
    }
}
