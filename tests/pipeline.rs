//! End-to-end track generation and driving

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use track_gen::Settings;
use track_gen::consts::{RESAMPLE_STEP, SPAWN_INDEX, TRACK_WIDTH};
use track_gen::settings::TrackConfig;
use track_gen::sim::{Session, TickInput, reset_vehicle, tick_vehicle};
use track_gen::track::{generate_track, path, resample, spline};

/// Distance walked along `dense` between consecutive centerline points,
/// with the index of each point located in `dense`
fn walked_gaps(dense: &[Vec2], centerline: &[Vec2]) -> Vec<f32> {
    let mut gaps = Vec::with_capacity(centerline.len());
    let mut at = 0;
    for target in &centerline[1..] {
        let mut walked = 0.0;
        loop {
            walked += dense[at].distance(dense[at + 1]);
            at += 1;
            if dense[at] == *target {
                break;
            }
        }
        gaps.push(walked);
    }
    gaps
}

#[test]
fn default_track_spacing_is_mostly_uniform() {
    let track = generate_track(&TrackConfig::default(), 12345).unwrap();
    let n = track.len();
    let near_step = track
        .centerline
        .windows(2)
        .filter(|w| {
            let d = w[0].distance(w[1]);
            d >= RESAMPLE_STEP * 0.9 && d <= RESAMPLE_STEP * 1.5
        })
        .count();
    // The seam stretch between the last walked point and the origin can be
    // coarse, most other gaps sit near the step
    assert!(near_step * 20 >= (n - 1) * 17, "{near_step} of {} gaps near step", n - 1);
}

#[test]
fn vehicle_drives_from_start_line() {
    let mut session = Session::new(Settings::default(), 777).unwrap();
    let start = session.track().start_line.position;
    let input = TickInput {
        forward: true,
        ..Default::default()
    };
    for _ in 0..120 {
        session.tick(&input, 1.0 / 60.0);
    }
    let travelled = session.vehicle().position().distance(start);
    assert!(travelled > 1.0);
    assert!(session.vehicle().speed <= Settings::default().vehicle.max_speed_forward);
}

#[test]
fn reset_after_driving_matches_fresh_vehicle() {
    let settings = Settings::default();
    let track = generate_track(&settings.track, 31).unwrap();
    let mut state = reset_vehicle(&track.start_line);
    let input = TickInput {
        forward: true,
        turn_right: true,
        ..Default::default()
    };
    for _ in 0..50 {
        state = tick_vehicle(state, &input, 0.05, &settings.vehicle);
    }
    state.reset(&track.start_line);
    assert_eq!(state, reset_vehicle(&track.start_line));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_tracks_hold_invariants(seed in any::<u64>(), segments in 3u32..14) {
        let config = TrackConfig::with_shape(segments, TRACK_WIDTH);
        let track = generate_track(&config, seed).unwrap();
        let n = track.len();

        prop_assert!(n > SPAWN_INDEX);
        prop_assert_eq!(track.inner.len(), n);
        prop_assert_eq!(track.outer.len(), n);
        for i in 0..n {
            let gap = track.inner[i].distance(track.outer[i]);
            prop_assert!((gap - TRACK_WIDTH).abs() < 1e-3, "index {} gap {}", i, gap);
        }

        let again = generate_track(&config, seed).unwrap();
        prop_assert_eq!(&track, &again);

        // Rebuild the dense polyline from the same seed to measure spacing
        let mut rng = Pcg32::seed_from_u64(seed);
        let raw = path::generate(&config, &mut rng).unwrap();
        let dense = spline::smooth(&raw, config.spline_steps).unwrap();
        prop_assert_eq!(
            &resample::resample(&dense, config.resample_step).unwrap(),
            &track.centerline
        );
        let max_dense = dense
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0f32, f32::max);

        // Every gap but the wrap gap n-1 -> 0
        let step = config.resample_step;
        for (i, walked) in walked_gaps(&dense, &track.centerline).into_iter().enumerate() {
            prop_assert!(walked >= step * (1.0 - 1e-5), "index {} walked {}", i, walked);
            let chord = track.centerline[i].distance(track.centerline[i + 1]);
            prop_assert!(chord > 0.0, "index {} repeats", i);
            prop_assert!(
                chord <= step + max_dense + 1e-3,
                "index {} chord {} over {} + {}", i, chord, step, max_dense
            );
        }
    }
}
