//! Track and vehicle settings
//!
//! Persisted as JSON next to the binary (or wherever the host points).
//! Every field has a default, so partial files are fine.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::error::{Result, TrackError};

/// Errors reading or writing a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings rejected: {0}")]
    Invalid(#[from] TrackError),
}

/// Track generation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Number of straight+arc pairs
    pub segment_count: u32,
    /// Full track width (boundaries sit at ±width/2)
    pub width: f32,

    // === Path synthesis ===
    pub min_straight: f32,
    pub max_straight: f32,
    pub min_curve_radius: f32,
    pub max_curve_radius: f32,
    /// Degrees
    pub min_turn_angle: f32,
    /// Degrees
    pub max_turn_angle: f32,
    /// Forward step along straights
    pub raw_step: f32,
    /// Angular steps per arc
    pub arc_steps: u32,

    // === Smoothing / resampling ===
    pub spline_steps: u32,
    pub resample_step: f32,

    // === Start line ===
    pub spawn_index: usize,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            segment_count: SEGMENT_COUNT,
            width: TRACK_WIDTH,

            min_straight: MIN_STRAIGHT,
            max_straight: MAX_STRAIGHT,
            min_curve_radius: MIN_CURVE_RADIUS,
            max_curve_radius: MAX_CURVE_RADIUS,
            min_turn_angle: MIN_TURN_ANGLE,
            max_turn_angle: MAX_TURN_ANGLE,
            raw_step: RAW_STEP,
            arc_steps: ARC_STEPS,

            spline_steps: SPLINE_STEPS,
            resample_step: RESAMPLE_STEP,

            spawn_index: SPAWN_INDEX,
        }
    }
}

impl TrackConfig {
    /// Default config with a different segment count and width
    pub fn with_shape(segment_count: u32, width: f32) -> Self {
        Self {
            segment_count,
            width,
            ..Self::default()
        }
    }

    /// Reject anything the pipeline cannot turn into a well-formed track.
    ///
    /// The spawn index can only be checked against a real centerline, so the
    /// boundary stage does that.
    pub fn validate(&self) -> Result<()> {
        if self.segment_count == 0 {
            return Err(invalid("segment_count must be positive"));
        }
        positive("width", self.width)?;
        positive("raw_step", self.raw_step)?;
        positive("resample_step", self.resample_step)?;
        if self.arc_steps == 0 {
            return Err(invalid("arc_steps must be positive"));
        }
        if self.spline_steps == 0 {
            return Err(invalid("spline_steps must be positive"));
        }
        range("straight", self.min_straight, self.max_straight)?;
        range("curve_radius", self.min_curve_radius, self.max_curve_radius)?;
        range("turn_angle", self.min_turn_angle, self.max_turn_angle)?;
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> TrackError {
    TrackError::InvalidConfiguration(msg.into())
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive and finite, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be non-negative and finite, got {value}")))
    }
}

fn range(name: &str, min: f32, max: f32) -> Result<()> {
    positive(&format!("min_{name}"), min)?;
    positive(&format!("max_{name}"), max)?;
    if min > max {
        return Err(invalid(format!("min_{name} ({min}) exceeds max_{name} ({max})")));
    }
    Ok(())
}

/// Vehicle integrator tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleTuning {
    /// Units per second squared
    pub acceleration: f32,
    pub max_speed_forward: f32,
    /// Magnitude of the reverse speed cap
    pub max_speed_backward: f32,
    /// Coast-down deceleration when no throttle is held
    pub friction: f32,
    /// Degrees per second
    pub turn_rate: f32,
    pub wheel_radius: f32,
    /// Upper clamp for a tick's elapsed time
    pub max_dt: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            max_speed_forward: MAX_SPEED_FW,
            max_speed_backward: MAX_SPEED_BW,
            friction: FRICTION,
            turn_rate: TURN_RATE,
            wheel_radius: WHEEL_RADIUS,
            max_dt: MAX_DT,
        }
    }
}

impl VehicleTuning {
    /// Reject tunings the integrator cannot step with bounded work
    pub fn validate(&self) -> Result<()> {
        positive("wheel_radius", self.wheel_radius)?;
        positive("max_dt", self.max_dt)?;
        non_negative("acceleration", self.acceleration)?;
        non_negative("max_speed_forward", self.max_speed_forward)?;
        non_negative("max_speed_backward", self.max_speed_backward)?;
        non_negative("friction", self.friction)?;
        non_negative("turn_rate", self.turn_rate)?;
        Ok(())
    }
}

/// All settings for a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub track: TrackConfig,
    pub vehicle: VehicleTuning,
}

impl Settings {
    /// Check both sections
    pub fn validate(&self) -> Result<()> {
        self.track.validate()?;
        self.vehicle.validate()
    }

    /// Load settings from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> std::result::Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings: Self = serde_json::from_str(&json)?;
                settings.validate()?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::result::Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
