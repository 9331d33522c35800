//! Seeded track generation
//!
//! Stages run strictly in order and each one validates what it is handed:
//! - `path`: rough loop from a random straight/arc plan
//! - `spline`: Catmull-Rom densification
//! - `resample`: near-uniform arc-length spacing
//! - `boundary`: inner/outer edges and the start line
//!
//! A [`Track`] is only produced when every stage succeeds, and is never
//! mutated afterwards.

pub mod boundary;
pub mod path;
pub mod resample;
pub mod spline;

pub use boundary::{Boundaries, StartLine};
pub use path::{PathSegmentSpec, TurnDirection};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Point2D;
use crate::error::Result;
use crate::settings::TrackConfig;

/// A generated closed track. Edges are index-aligned with the centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Seed the track was generated from (0 when an external RNG was used)
    pub seed: u64,
    pub width: f32,
    pub centerline: Vec<Point2D>,
    pub inner: Vec<Point2D>,
    pub outer: Vec<Point2D>,
    pub start_line: StartLine,
}

impl Track {
    /// Number of centerline points
    pub fn len(&self) -> usize {
        self.centerline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centerline.is_empty()
    }

    /// Closed length of the centerline loop
    pub fn length(&self) -> f32 {
        let n = self.centerline.len();
        (0..n)
            .map(|i| self.centerline[i].distance(self.centerline[(i + 1) % n]))
            .sum()
    }

    /// Axis-aligned box around both edges as `(min, max)`
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.inner.iter().chain(&self.outer).fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Lane line point between the two edges at `i`. Indices wrap around
    /// the loop.
    ///
    /// # Panics
    ///
    /// Panics if the track is empty.
    pub fn midline(&self, i: usize) -> Vec2 {
        let i = i % self.len();
        (self.inner[i] + self.outer[i]) * 0.5
    }

    /// Unit direction of travel at centerline index `i`, wrapping like
    /// [`Track::midline`].
    ///
    /// # Panics
    ///
    /// Panics if the track is empty.
    pub fn tangent(&self, i: usize) -> Vec2 {
        boundary::tangent_at(&self.centerline, i % self.len())
    }
}

/// Generate a track from a seed. Same config and seed, same track.
pub fn generate_track(config: &TrackConfig, seed: u64) -> Result<Track> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut track = generate_track_with_rng(config, &mut rng)?;
    track.seed = seed;
    log::info!(
        "Track seed {}: {} points, length {:.1}",
        seed,
        track.len(),
        track.length()
    );
    Ok(track)
}

/// Generate a track drawing from a caller-owned RNG
pub fn generate_track_with_rng<R: Rng + ?Sized>(
    config: &TrackConfig,
    rng: &mut R,
) -> Result<Track> {
    config.validate()?;

    let raw = path::generate(config, rng)?;
    let dense = spline::smooth(&raw, config.spline_steps)?;
    let centerline = resample::resample(&dense, config.resample_step)?;
    log::debug!(
        "Track stages: raw={}, dense={}, centerline={}",
        raw.len(),
        dense.len(),
        centerline.len()
    );

    let (edges, start_line) =
        boundary::build_with_spawn(&centerline, config.width, config.spawn_index)?;

    Ok(Track {
        seed: 0,
        width: config.width,
        centerline,
        inner: edges.inner,
        outer: edges.outer,
        start_line,
    })
}
