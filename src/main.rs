//! Hoop Shot entry point
//!
//! Runs a headless autoplay session: a seeded player walks the
//! ball around the court, picks a power, and shoots, while the simulation
//! runs at a fixed timestep behind a 60 Hz frame clock.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use hoop_shot::consts::{MADE_TEXT, MISSED_TEXT};
use hoop_shot::sim::{GameEvent, GamePhase, GameState, TickInput};
use hoop_shot::{FrameClock, Key, Settings};

/// Render cadence the autoplay driver pretends to run at
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a flight after this many frames (20 seconds)
const MAX_FLIGHT_FRAMES: u32 = 60 * 20;

#[derive(Debug, Parser)]
#[command(name = "hoop-shot", about = "Headless basketball shooting simulation")]
struct Args {
    /// RNG seed for the autoplay shooter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of shots to take
    #[arg(long, default_value_t = 10)]
    shots: u32,

    /// JSON settings file (defaults are used when omitted)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Hoop Shot starting...");

    let settings = match &args.settings {
        Some(path) => match Settings::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Session initialized with seed: {}", args.seed);

    let mut rng = Pcg32::seed_from_u64(args.seed);
    let mut clock = FrameClock::new();
    let mut input = TickInput::default();

    for shot in 0..args.shots {
        line_up_shot(&mut rng, &state, &mut input);
        press(&mut input, &state, Key::Space);

        let mut frames = 0;
        loop {
            clock.run_frame(&mut state, &mut input, FRAME_DT);
            for event in state.drain_events() {
                report(shot, &event);
            }
            frames += 1;
            if state.phase() == GamePhase::Idle && input.commands.is_empty() {
                break;
            }
            if frames >= MAX_FLIGHT_FRAMES {
                log::warn!(
                    "Shot {} still flying after {} frames, resetting",
                    shot + 1,
                    frames
                );
                break;
            }
        }

        press(&mut input, &state, Key::R);
    }

    // Flush the final reset
    clock.run_frame(&mut state, &mut input, FRAME_DT);
    state.drain_events();

    let snapshot = state.snapshot();
    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "Shots: {}  Made: {}  Score: {}  Accuracy: {}%",
            snapshot.attempted, snapshot.made, snapshot.score, snapshot.accuracy_percent
        );
    }
    ExitCode::SUCCESS
}

/// Queue random repositioning and power presses ahead of a shot
fn line_up_shot(rng: &mut Pcg32, state: &GameState, input: &mut TickInput) {
    let lateral = rng.random_range(-6..=6);
    let long = rng.random_range(-26..=26);
    let power = rng.random_range(-4..=10);

    let (key, count) = axis_presses(lateral, Key::ArrowLeft, Key::ArrowRight);
    for _ in 0..count {
        press(input, state, key);
    }
    let (key, count) = axis_presses(long, Key::ArrowUp, Key::ArrowDown);
    for _ in 0..count {
        press(input, state, key);
    }
    let (key, count) = axis_presses(power, Key::S, Key::W);
    for _ in 0..count {
        press(input, state, key);
    }
}

fn axis_presses(n: i32, negative: Key, positive: Key) -> (Key, u32) {
    if n < 0 {
        (negative, n.unsigned_abs())
    } else {
        (positive, n as u32)
    }
}

fn press(input: &mut TickInput, state: &GameState, key: Key) {
    if let Some(command) = key.command(&state.settings) {
        input.push(command);
    }
}

fn report(shot: u32, event: &GameEvent) {
    match event {
        GameEvent::ShotLaunched { hoop, power, .. } => {
            log::info!("Shot {}: {:?} hoop at {:.0}% power", shot + 1, hoop, power * 100.0)
        }
        GameEvent::ShotMade { .. } => println!("Shot {}: {}", shot + 1, MADE_TEXT),
        GameEvent::ShotMissed { reason, .. } => {
            println!("Shot {}: {} ({:?})", shot + 1, MISSED_TEXT, reason)
        }
        other => log::debug!("Shot {}: {:?}", shot + 1, other),
    }
}
