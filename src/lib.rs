//! Track Gen - procedural racetrack geometry and vehicle kinematics
//!
//! Core modules:
//! - `track`: Seeded track generation (path synthesis, spline smoothing,
//!   arc-length resampling, boundaries and start line)
//! - `sim`: Deterministic vehicle integrator and the session that drives it
//! - `settings`: Data-driven track and vehicle tuning
//! - `error`: Stage error taxonomy
//!
//! Coordinates live on the ground plane. Points are `glam::Vec2` where `y`
//! carries the world `z` axis.

pub mod error;
pub mod settings;
pub mod sim;
pub mod track;

pub use error::{Result, TrackError};
pub use settings::Settings;

use glam::Vec2;

/// A planar `(x, z)` point. The `y` component holds world `z`.
pub type Point2D = Vec2;

/// Generation and vehicle constants
pub mod consts {
    /// Default number of straight+arc pairs in a track
    pub const SEGMENT_COUNT: u32 = 10;
    /// Constant track width
    pub const TRACK_WIDTH: f32 = 12.0;

    /// Straight run length range
    pub const MIN_STRAIGHT: f32 = 30.0;
    pub const MAX_STRAIGHT: f32 = 80.0;
    /// Arc radius range
    pub const MIN_CURVE_RADIUS: f32 = 30.0;
    pub const MAX_CURVE_RADIUS: f32 = 80.0;
    /// Arc turn range (degrees)
    pub const MIN_TURN_ANGLE: f32 = 45.0;
    pub const MAX_TURN_ANGLE: f32 = 120.0;

    /// Forward step used to discretize straights
    pub const RAW_STEP: f32 = 5.0;
    /// Angular steps per arc
    pub const ARC_STEPS: u32 = 20;
    /// Catmull-Rom sub-steps per raw segment
    pub const SPLINE_STEPS: u32 = 10;
    /// Centerline spacing after resampling
    pub const RESAMPLE_STEP: f32 = 2.0;
    /// Centerline index of the start line (skips the loop seam)
    pub const SPAWN_INDEX: usize = 10;
    /// Added to the start line heading so the line is drawn across travel
    pub const START_LINE_ROTATION: f32 = 90.0;

    /// Vehicle defaults
    pub const ACCELERATION: f32 = 20.0;
    pub const MAX_SPEED_FW: f32 = 30.0;
    pub const MAX_SPEED_BW: f32 = 30.0;
    pub const FRICTION: f32 = 8.0;
    /// Turn rate in degrees per second
    pub const TURN_RATE: f32 = 90.0;
    pub const WHEEL_RADIUS: f32 = 0.3;
    /// Largest elapsed time a single tick will integrate (frame hitches)
    pub const MAX_DT: f32 = 0.1;
}

/// Wrap an angle in degrees to (-180, 180]. Non-finite input maps to 0.
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // rem_euclid can round up to exactly 360 for tiny negative remainders
    let wrapped = 180.0 - (180.0 - angle).rem_euclid(360.0);
    if wrapped <= -180.0 { 180.0 } else { wrapped }
}

/// Unit direction for a path-walker heading (degrees, 0 = +x, toward +z)
#[inline]
pub fn walker_direction(heading_degrees: f32) -> Vec2 {
    let rad = heading_degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Unit direction for a vehicle heading (degrees, 0 = +z, clockwise-positive)
#[inline]
pub fn vehicle_direction(heading_degrees: f32) -> Vec2 {
    let rad = heading_degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}
