//! Buzz Buddy entry point
//!
//! Headless native runner: drives a scripted demo session through the
//! simulation and logs what a renderer would show.
//!
//! Usage: `buzz-buddy [settings.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use buzz_buddy::Settings;
use buzz_buddy::pet_center;
use buzz_buddy::platform::{FrameClock, FramePacer, InputEvent, InputQueue};
use buzz_buddy::sim::pet::action_button;
use buzz_buddy::sim::{Flow, FrameSnapshot, ModeController, Room, autopilot};

/// Frames spent grooming, feeding and idling before each round
const GROOM_FRAMES: u64 = 240;
const FEED_FRAMES: u64 = 60;
/// Frames the round-over screen stays up before the demo confirms it
const ROUND_OVER_FRAMES: u64 = 90;

/// Scripted demo steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoStep {
    Groom { until: u64 },
    Feed { until: u64 },
    Play,
    RoundOver { until: u64 },
}

/// Produce this frame's input events for the demo
fn demo_input(step: &mut DemoStep, frame: u64, ctrl: &ModeController, queue: &mut InputQueue) {
    match *step {
        DemoStep::Groom { until } => {
            if ctrl.room() != Some(Room::Bathroom) {
                queue.push(InputEvent::ContextSelect(Room::Bathroom));
            }
            // Sweep the brush back and forth across the hive
            let sweep = ((frame as f32) * 0.05).sin() * 60.0;
            queue.push(InputEvent::PointerPosition(pet_center() + glam::Vec2::new(sweep, 0.0)));
            if frame >= until {
                *step = DemoStep::Feed { until: frame + FEED_FRAMES };
            }
        }
        DemoStep::Feed { until } => {
            if ctrl.room() != Some(Room::PollenStorage) {
                queue.push(InputEvent::PointerDown(Room::PollenStorage.nav_button().center()));
                queue.push(InputEvent::PointerDown(action_button().center()));
            }
            if frame >= until {
                queue.push(InputEvent::ContextSelect(Room::Nest));
                queue.push(InputEvent::StartRound);
                *step = DemoStep::Play;
            }
        }
        DemoStep::Play => match ctrl.session() {
            Some(session) if session.is_over() => {
                *step = DemoStep::RoundOver { until: frame + ROUND_OVER_FRAMES };
            }
            Some(session) => queue.extend(autopilot(session, &ctrl.tuning().flappy)),
            None => {}
        },
        DemoStep::RoundOver { until } => {
            if frame >= until {
                queue.push(InputEvent::JumpPressed);
                *step = DemoStep::Groom { until: frame + GROOM_FRAMES };
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Buzz Buddy (headless) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.effective_seed(clock_seed);
    log::info!("Simulation initialized with seed: {}", seed);

    let mut ctrl = ModeController::new(settings.tuning.clone(), seed);
    let mut clock = FrameClock::new(settings.frame_rate);
    let mut pacer = settings.realtime.then(|| FramePacer::new(settings.frame_rate));
    let mut queue = InputQueue::new();
    let mut step = DemoStep::Groom { until: GROOM_FRAMES };

    while clock.frame() < settings.demo_frames {
        let frame = clock.advance();
        demo_input(&mut step, frame, &ctrl, &mut queue);

        if ctrl.tick(clock.now_ms(), &queue.drain()) == Flow::Quit {
            break;
        }

        if let Some(pacer) = pacer.as_mut() {
            pacer.wait();
        }
    }

    let snapshot = FrameSnapshot::capture(&ctrl);
    log::info!(
        "Demo finished after {} frames: {} rounds, level {}, clean {:.1}, honey {:.1}, happy {:.1}",
        clock.frame(),
        ctrl.rounds_played(),
        snapshot.pet.level,
        snapshot.pet.cleanliness,
        snapshot.pet.hunger,
        snapshot.pet.happiness
    );
    match snapshot.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
