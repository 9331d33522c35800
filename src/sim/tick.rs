//! Per-frame vehicle integration
//!
//! Advances a [`VehicleState`] by one variable timestep. Nothing here reads
//! the track; the vehicle only learns about the track through a reset.

use super::vehicle::VehicleState;
use crate::normalize_degrees;
use crate::settings::VehicleTuning;

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Clamp a measured frame time into `[0, max_dt]`
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Advance the vehicle by one frame.
///
/// Position integrates the speed held at the start of the tick along the
/// heading after this tick's turn. Throttle wins over brake when both are
/// held.
pub fn tick(state: &mut VehicleState, input: &TickInput, dt: f32, tuning: &VehicleTuning) {
    let clamped = clamp_dt(dt, tuning.max_dt);
    if clamped < dt {
        log::debug!("Frame time {dt:.3}s clamped to {clamped:.3}s");
    }
    let dt = clamped;

    let start_speed = state.speed;

    // Throttle / brake / coast
    state.speed = if input.forward {
        (state.speed + tuning.acceleration * dt).min(tuning.max_speed_forward)
    } else if input.backward {
        (state.speed - tuning.acceleration * dt).max(-tuning.max_speed_backward)
    } else if state.speed > 0.0 {
        (state.speed - tuning.friction * dt).max(0.0)
    } else if state.speed < 0.0 {
        (state.speed + tuning.friction * dt).min(0.0)
    } else {
        0.0
    };

    // Steering
    let turn = tuning.turn_rate * dt;
    if input.turn_left {
        state.heading_degrees += turn;
    }
    if input.turn_right {
        state.heading_degrees -= turn;
    }
    state.heading_degrees = normalize_degrees(state.heading_degrees);

    let distance = start_speed * dt;
    let rad = state.heading_degrees.to_radians();
    state.x += distance * rad.sin();
    state.z += distance * rad.cos();

    // Wheels roll with distance covered, not time
    let circumference = std::f32::consts::TAU * tuning.wheel_radius;
    let spin = distance / circumference * 360.0;
    state.wheel_spin_degrees = wrap_spin(state.wheel_spin_degrees + spin);
}

/// Keep wheel spin within one turn either way, sign preserved
#[inline]
fn wrap_spin(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        0.0
    } else if degrees.abs() <= 360.0 {
        degrees
    } else {
        degrees % 360.0
    }
}

/// Pure form of [`tick`]
pub fn tick_vehicle(
    state: VehicleState,
    input: &TickInput,
    dt: f32,
    tuning: &VehicleTuning,
) -> VehicleState {
    let mut next = state;
    tick(&mut next, input, dt, tuning);
    next
}
