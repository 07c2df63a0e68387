//! Device-agnostic input events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Room;

/// Input consumed by the simulation. Produced by whatever polls the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Close the program
    Quit,
    /// Jump key (space); also confirms the round-over screen
    JumpPressed,
    /// Pointer pressed at a screen position
    PointerDown(Vec2),
    /// Pointer moved to a screen position
    PointerPosition(Vec2),
    /// Switch to a room
    ContextSelect(Room),
    /// Start a mini-game round (only honored in the nest)
    StartRound,
}

/// FIFO of pending events, drained once per frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.pending.extend(events);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
