//! Deterministic vehicle simulation
//!
//! This module must stay pure and deterministic:
//! - Elapsed time is clamped before use
//! - No rendering or platform dependencies
//! - The track is only read on reset

pub mod session;
pub mod tick;
pub mod vehicle;

pub use session::Session;
pub use tick::{TickInput, clamp_dt, tick, tick_vehicle};
pub use vehicle::{VehicleState, reset_vehicle};
