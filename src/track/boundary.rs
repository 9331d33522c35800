//! Track edges and start line
//!
//! Edges are the centerline pushed sideways by half the width along the
//! perpendicular of the forward tangent. They stay index-aligned with the
//! centerline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Point2D;
use crate::consts::{SPAWN_INDEX, START_LINE_ROTATION};
use crate::error::{Result, TrackError};

/// Where the race starts and which way the line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartLine {
    pub position: Point2D,
    /// Direction to the next centerline point (walker convention) plus a
    /// quarter turn
    pub heading_degrees: f32,
}

/// Inner/outer edges, both the same length as the centerline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    pub inner: Vec<Vec2>,
    pub outer: Vec<Vec2>,
}

/// Unit direction from `centerline[i]` to its successor (wrapping).
///
/// A zero-length step is divided by 1 instead, yielding a zero tangent.
pub fn tangent_at(centerline: &[Vec2], i: usize) -> Vec2 {
    let n = centerline.len();
    let delta = centerline[(i + 1) % n] - centerline[i];
    let mut len = delta.length();
    if len == 0.0 {
        len = 1.0;
    }
    delta / len
}

/// Left-hand perpendicular of a tangent
#[inline]
pub fn perpendicular(tangent: Vec2) -> Vec2 {
    Vec2::new(-tangent.y, tangent.x)
}

/// Offset the centerline into edges and place the start line at
/// [`SPAWN_INDEX`]
pub fn build(centerline: &[Vec2], width: f32) -> Result<(Boundaries, StartLine)> {
    build_with_spawn(centerline, width, SPAWN_INDEX)
}

pub fn build_with_spawn(
    centerline: &[Vec2],
    width: f32,
    spawn_index: usize,
) -> Result<(Boundaries, StartLine)> {
    let n = centerline.len();
    if n == 0 {
        return Err(TrackError::InvalidInput("centerline is empty".into()));
    }
    if !(width.is_finite() && width > 0.0) {
        return Err(TrackError::InvalidConfiguration(format!(
            "track width must be positive and finite, got {width}"
        )));
    }
    if spawn_index >= n {
        return Err(TrackError::InvalidConfiguration(format!(
            "spawn index {spawn_index} out of range for {n} centerline points"
        )));
    }

    let half = width * 0.5;
    let mut inner = Vec::with_capacity(n);
    let mut outer = Vec::with_capacity(n);
    for (i, &center) in centerline.iter().enumerate() {
        let offset = perpendicular(tangent_at(centerline, i)) * half;
        inner.push(center - offset);
        outer.push(center + offset);
    }

    let start_line = start_line_at(centerline, spawn_index);
    Ok((Boundaries { inner, outer }, start_line))
}

fn start_line_at(centerline: &[Vec2], index: usize) -> StartLine {
    let position = centerline[index];
    let next = centerline[(index + 1) % centerline.len()];
    let dir = next - position;
    StartLine {
        position,
        heading_degrees: dir.y.atan2(dir.x).to_degrees() + START_LINE_ROTATION,
    }
}
