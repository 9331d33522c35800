//! Rough path synthesis
//!
//! A track starts life as a plan of alternating straights and arcs. The
//! plan is drawn from the injected RNG, then a single walker turns it into
//! a closed polyline.
//!
//! The walker's heading is in degrees with 0 along +x and positive turning
//! toward +z. This is not the vehicle convention; the start line heading is
//! derived from walker-space directions and carries that through.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};
use crate::settings::TrackConfig;
use crate::walker_direction;

/// Which way an arc bends the walker heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Heading increases
    Left,
    /// Heading decreases
    Right,
}

impl TurnDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Right => -1.0,
        }
    }
}

/// One piece of the rough path plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegmentSpec {
    Straight {
        length: f32,
    },
    Arc {
        radius: f32,
        /// Degrees
        turn_angle: f32,
        direction: TurnDirection,
    },
}

/// Draw `segment_count` straight+arc pairs.
///
/// Draw order per pair is fixed (length, direction, turn angle, radius) so a
/// seed always yields the same plan.
pub fn plan_segments<R: Rng + ?Sized>(
    config: &TrackConfig,
    rng: &mut R,
) -> Result<Vec<PathSegmentSpec>> {
    if config.segment_count == 0 {
        return Err(TrackError::InvalidConfiguration(
            "segment_count must be positive".into(),
        ));
    }

    let mut plan = Vec::with_capacity(config.segment_count as usize * 2);
    for _ in 0..config.segment_count {
        let length = rng.random_range(config.min_straight..=config.max_straight);
        plan.push(PathSegmentSpec::Straight { length });

        let direction = if rng.random_bool(0.5) {
            TurnDirection::Left
        } else {
            TurnDirection::Right
        };
        let turn_angle = rng.random_range(config.min_turn_angle..=config.max_turn_angle);
        let radius = rng.random_range(config.min_curve_radius..=config.max_curve_radius);
        plan.push(PathSegmentSpec::Arc {
            radius,
            turn_angle,
            direction,
        });
    }

    Ok(plan)
}

/// Forward-Euler walker over a segment plan
#[derive(Debug, Clone)]
struct PathWalker {
    pos: Vec2,
    heading: f32,
    points: Vec<Vec2>,
}

impl PathWalker {
    fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            heading: 0.0,
            points: Vec::new(),
        }
    }

    /// Whole `step`-sized moves only; a partial final step is dropped
    fn straight(&mut self, length: f32, step: f32) {
        let dir = walker_direction(self.heading);
        let steps = (length / step).floor() as u32;
        for _ in 0..steps {
            self.pos += dir * step;
            self.points.push(self.pos);
        }
    }

    /// Heading turns before each move
    fn arc(&mut self, radius: f32, turn_angle: f32, direction: TurnDirection, steps: u32) {
        let steps_f = steps as f32;
        let arc_step = std::f32::consts::PI * radius * (turn_angle / 360.0) / steps_f;
        let heading_step = direction.sign() * turn_angle / steps_f;
        for _ in 0..steps {
            self.heading += heading_step;
            self.pos += walker_direction(self.heading) * arc_step;
            self.points.push(self.pos);
        }
    }
}

/// Walk a plan into a closed raw polyline.
///
/// The loop is closed with one synthetic point halfway between the last and
/// first samples, never a copy of the first.
pub fn walk_segments(
    plan: &[PathSegmentSpec],
    raw_step: f32,
    arc_steps: u32,
) -> Result<Vec<Vec2>> {
    if plan.is_empty() {
        return Err(TrackError::InvalidInput("segment plan is empty".into()));
    }
    if !(raw_step.is_finite() && raw_step > 0.0) || arc_steps == 0 {
        return Err(TrackError::InvalidConfiguration(format!(
            "walker needs a positive step and arc step count, got {raw_step} / {arc_steps}"
        )));
    }

    let mut walker = PathWalker::new();
    for segment in plan {
        match *segment {
            PathSegmentSpec::Straight { length } => walker.straight(length, raw_step),
            PathSegmentSpec::Arc {
                radius,
                turn_angle,
                direction,
            } => walker.arc(radius, turn_angle, direction, arc_steps),
        }
    }

    let mut points = walker.points;
    if points.len() < 2 {
        return Err(TrackError::InvalidInput(format!(
            "segment plan produced {} points, need at least 2",
            points.len()
        )));
    }

    let closing = (points[points.len() - 1] + points[0]) * 0.5;
    points.push(closing);
    Ok(points)
}

/// Plan and walk a rough closed path
pub fn generate<R: Rng + ?Sized>(config: &TrackConfig, rng: &mut R) -> Result<Vec<Vec2>> {
    let plan = plan_segments(config, rng)?;
    log::debug!("Planned {} path segments", plan.len());
    walk_segments(&plan, config.raw_step, config.arc_steps)
}
