//! Track Gen entry point
//!
//! Generates a track, drives the vehicle for a few simulated seconds and
//! prints a JSON summary.
//!
//! Usage: `track-gen [seed] [settings.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;

use track_gen::Settings;
use track_gen::sim::{Session, TickInput, VehicleState};
use track_gen::track::StartLine;

/// Simulated frame rate for the demo drive
const FRAME_DT: f32 = 1.0 / 60.0;
const DRIVE_SECONDS: u32 = 5;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    points: usize,
    length: f32,
    bounds_min: [f32; 2],
    bounds_max: [f32; 2],
    start_line: StartLine,
    vehicle: VehicleState,
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        None => 12345,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("seed must be an unsigned integer: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("track_gen.json"));

    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Track Gen starting with seed {}", seed);
    let mut session = match Session::new(settings, seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("track generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let throttle = TickInput {
        forward: true,
        ..Default::default()
    };
    for _ in 0..DRIVE_SECONDS * 60 {
        session.tick(&throttle, FRAME_DT);
    }

    let track = session.track();
    let (min, max) = track.bounds();
    let summary = Summary {
        seed,
        points: track.len(),
        length: track.length(),
        bounds_min: min.to_array(),
        bounds_max: max.to_array(),
        start_line: track.start_line,
        vehicle: *session.vehicle(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to encode summary: {e}");
            ExitCode::FAILURE
        }
    }
}
