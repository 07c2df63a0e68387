//! Top-level mode state machine
//!
//! Exactly one mode runs per frame:
//! - `Pet`: rooms, decay, grooming, feeding. Starting a round from the nest
//!   switches to `Flappy`.
//! - `Flappy`: one mini-game round. Confirming the round-over screen pays the
//!   score out as XP and happiness and returns to the nest.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::facts::{FactProvider, RandomFacts};
use super::pet::{PetState, Room, StatDecayScheduler, action_button, brush_probe};
use super::level::XpLadder;
use super::state::GameSession;
use super::tick::tick;
use crate::platform::InputEvent;
use crate::settings::Tuning;

/// Pet-management mode payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetMode {
    pub room: Room,
}

/// Mini-game mode payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlappyMode {
    pub session: GameSession,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Mode {
    Pet(PetMode),
    Flappy(FlappyMode),
}

impl Mode {
    pub fn is_pet(&self) -> bool {
        matches!(self, Mode::Pet(_))
    }

    pub fn is_flappy(&self) -> bool {
        matches!(self, Mode::Flappy(_))
    }
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a finished round paid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u32,
    pub xp_gained: u32,
    pub happiness_gained: f32,
    pub levels_gained: u8,
    pub fact: Option<String>,
}

/// Deferred transition decided while handling an event
enum Transition {
    StartRound,
    FinishRound,
}

/// Owns the pet and the active mode; the single writer of all simulation state
pub struct ModeController<F: FactProvider = RandomFacts> {
    pet: PetState,
    mode: Mode,
    decay: StatDecayScheduler,
    cursor: Option<Vec2>,
    tuning: Tuning,
    rng: Pcg32,
    facts: F,
    last_round: Option<RoundSummary>,
    rounds_played: u32,
    now_ms: u64,
}

impl ModeController<RandomFacts> {
    /// Controller with the built-in bee facts, both RNG streams derived from `seed`
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let facts = RandomFacts::bee_facts(seed.wrapping_add(1));
        Self::with_facts(tuning, seed, facts)
    }
}

impl<F: FactProvider> ModeController<F> {
    pub fn with_facts(tuning: Tuning, seed: u64, facts: F) -> Self {
        let pet = PetState::new(XpLadder::new(tuning.pet.xp_thresholds.clone()));
        Self {
            pet,
            mode: Mode::Pet(PetMode::default()),
            decay: StatDecayScheduler::new(0),
            cursor: None,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            facts,
            last_round: None,
            rounds_played: 0,
            now_ms: 0,
        }
    }

    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    pub fn pet_mut(&mut self) -> &mut PetState {
        &mut self.pet
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Current room; `None` while a round is running
    pub fn room(&self) -> Option<Room> {
        match &self.mode {
            Mode::Pet(pet_mode) => Some(pet_mode.room),
            Mode::Flappy(_) => None,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.mode {
            Mode::Flappy(flappy) => Some(&flappy.session),
            Mode::Pet(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        match &mut self.mode {
            Mode::Flappy(flappy) => Some(&mut flappy.session),
            Mode::Pet(_) => None,
        }
    }

    /// Run one frame: handle the event batch in order, then tick the active mode.
    pub fn tick(&mut self, now_ms: u64, events: &[InputEvent]) -> Flow {
        self.now_ms = now_ms;

        for &event in events {
            if event == InputEvent::Quit {
                log::info!("Quit requested");
                return Flow::Quit;
            }
            self.handle_event(event);
        }

        match &mut self.mode {
            Mode::Pet(pet_mode) => {
                self.decay.update(&mut self.pet, now_ms, &self.tuning.pet);
                if pet_mode.room == Room::Bathroom {
                    if let Some(cursor) = self.cursor {
                        self.pet.hover_clean(&brush_probe(cursor), &self.tuning.pet);
                    }
                }
            }
            Mode::Flappy(flappy) => {
                let result = tick(&mut flappy.session, now_ms, &mut self.rng, &self.tuning.flappy);
                if result.ended() {
                    flappy.session.fact = Some(self.facts.next_fact());
                }
            }
        }

        Flow::Continue
    }

    fn handle_event(&mut self, event: InputEvent) {
        if let InputEvent::PointerPosition(pos) | InputEvent::PointerDown(pos) = event {
            self.cursor = Some(pos);
        }

        let transition = match &mut self.mode {
            Mode::Pet(pet_mode) => Self::handle_pet_event(pet_mode, &mut self.pet, event),
            Mode::Flappy(flappy) => {
                let session = &mut flappy.session;
                match event {
                    InputEvent::JumpPressed if session.is_active() => {
                        session.jump(&self.tuning.flappy);
                        None
                    }
                    InputEvent::JumpPressed | InputEvent::PointerDown(_) if session.is_over() => {
                        Some(Transition::FinishRound)
                    }
                    _ => None,
                }
            }
        };

        match transition {
            Some(Transition::StartRound) => self.start_round(),
            Some(Transition::FinishRound) => {
                self.finish_round();
            }
            None => {}
        }
    }

    fn handle_pet_event(pet_mode: &mut PetMode, pet: &mut PetState, event: InputEvent) -> Option<Transition> {
        match event {
            InputEvent::ContextSelect(room) => {
                change_room(pet_mode, room);
                None
            }
            InputEvent::StartRound if pet_mode.room == Room::Nest => Some(Transition::StartRound),
            InputEvent::StartRound => {
                log::debug!("Start round ignored outside the nest ({})", pet_mode.room.label());
                None
            }
            InputEvent::PointerDown(pos) => {
                if let Some(room) = Room::at_point(pos) {
                    change_room(pet_mode, room);
                }
                if !action_button().contains_point(pos) {
                    return None;
                }
                match pet_mode.room {
                    Room::Nest => Some(Transition::StartRound),
                    Room::PollenStorage => {
                        pet.feed();
                        None
                    }
                    Room::Bathroom => None,
                }
            }
            _ => None,
        }
    }

    /// Enter the mini-game with a fresh round
    pub fn start_round(&mut self) {
        if self.mode.is_flappy() {
            return;
        }
        log::info!("Starting flappy round");
        self.mode = Mode::Flappy(FlappyMode {
            session: GameSession::new(self.now_ms, &self.tuning.flappy),
        });
    }

    /// Pay out a finished round and return to the nest.
    ///
    /// Does nothing unless a round is running and over.
    pub fn finish_round(&mut self) -> Option<RoundSummary> {
        let session = match &self.mode {
            Mode::Flappy(flappy) if flappy.session.is_over() => &flappy.session,
            _ => return None,
        };
        let score = session.score;
        let fact = session.fact.clone();

        let xp_gained = score.saturating_mul(self.tuning.pet.xp_per_point);
        let levels_gained = self.pet.progression.apply_xp(xp_gained);
        let happiness_gained = self.pet.cheer(score as f32 * self.tuning.pet.happiness_per_point);

        let summary = RoundSummary {
            score,
            xp_gained,
            happiness_gained,
            levels_gained,
            fact,
        };
        log::info!(
            "Returned to nest: score {}, +{} XP, happy +{:.1}, level {}",
            score,
            xp_gained,
            happiness_gained,
            self.pet.level()
        );

        self.mode = Mode::Pet(PetMode { room: Room::Nest });
        self.rounds_played += 1;
        self.last_round = Some(summary.clone());
        Some(summary)
    }
}

fn change_room(pet_mode: &mut PetMode, room: Room) {
    if pet_mode.room != room {
        log::info!("Moved to {}", room.label());
        pet_mode.room = room;
    }
}
