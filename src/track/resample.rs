//! Arc-length resampling of the dense spline
//!
//! Emits a point each time the distance walked since the last emitted point
//! reaches `step`. The overshoot past `step` is discarded, so the distance
//! walked between emitted points is at least `step` and at most `step` plus
//! one dense segment. Chords can be shorter where the dense path bends
//! sharply, and the wrap gap back to the first point may be short.

use glam::Vec2;

use crate::error::{Result, TrackError};

pub fn resample(dense: &[Vec2], step: f32) -> Result<Vec<Vec2>> {
    if dense.len() < 2 {
        return Err(TrackError::InvalidInput(format!(
            "resampling needs at least 2 points, got {}",
            dense.len()
        )));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(TrackError::InvalidConfiguration(format!(
            "resample step must be positive and finite, got {step}"
        )));
    }

    let mut out = vec![dense[0]];
    let mut walked = 0.0;
    for pair in dense.windows(2) {
        walked += pair[0].distance(pair[1]);
        if walked >= step {
            out.push(pair[1]);
            walked = 0.0;
        }
    }

    Ok(out)
}
