//! Vehicle kinematic state
//!
//! Heading is in degrees with 0 along +z and positive angles swinging
//! toward +x, so forward motion is `(sin h, cos h)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;
use crate::track::StartLine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub x: f32,
    pub z: f32,
    /// Degrees, kept in (-180, 180]
    pub heading_degrees: f32,
    /// Signed; negative is reversing
    pub speed: f32,
    /// Degrees, kept in [-360, 360]
    pub wheel_spin_degrees: f32,
}

impl VehicleState {
    /// Vehicle parked on the start line
    pub fn on_start_line(start: &StartLine) -> Self {
        Self {
            x: start.position.x,
            z: start.position.y,
            heading_degrees: normalize_degrees(start.heading_degrees),
            speed: 0.0,
            wheel_spin_degrees: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Unit forward direction in x/z
    pub fn forward(&self) -> Vec2 {
        crate::vehicle_direction(self.heading_degrees)
    }

    /// Put the vehicle back on the start line, stopped
    pub fn reset(&mut self, start: &StartLine) {
        *self = Self::on_start_line(start);
    }
}

/// Fresh vehicle state on the start line
pub fn reset_vehicle(start: &StartLine) -> VehicleState {
    VehicleState::on_start_line(start)
}
