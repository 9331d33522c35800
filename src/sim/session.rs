//! A track plus the vehicle driving on it
//!
//! The host loop owns one session: generate at startup, tick once per frame,
//! reset or regenerate on command.

use serde::Serialize;

use super::tick::{TickInput, tick};
use super::vehicle::VehicleState;
use crate::error::Result;
use crate::settings::Settings;
use crate::track::{Track, generate_track};

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub settings: Settings,
    track: Track,
    vehicle: VehicleState,
    /// Frames integrated since the last reset
    pub ticks: u64,
}

impl Session {
    /// Generate a track and park the vehicle on its start line
    pub fn new(settings: Settings, seed: u64) -> Result<Self> {
        settings.vehicle.validate()?;
        let track = generate_track(&settings.track, seed)?;
        let vehicle = VehicleState::on_start_line(&track.start_line);
        Ok(Self {
            settings,
            track,
            vehicle,
            ticks: 0,
        })
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn reset_vehicle(&mut self) {
        self.vehicle.reset(&self.track.start_line);
        self.ticks = 0;
    }

    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.vehicle, input, dt, &self.settings.vehicle);
        self.ticks += 1;
    }

    /// Swap in a freshly generated track. On failure the current track and
    /// vehicle are left exactly as they were.
    pub fn regenerate(&mut self, seed: u64) -> Result<()> {
        let track = generate_track(&self.settings.track, seed)?;
        self.track = track;
        self.reset_vehicle();
        log::info!("Regenerated track with seed {}", seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use crate::settings::TrackConfig;

    #[test]
    fn test_new_session_starts_on_line() {
        let session = Session::new(Settings::default(), 12345).unwrap();
        let start = session.track().start_line;
        assert_eq!(session.vehicle().position(), start.position);
        assert_eq!(session.vehicle().speed, 0.0);
    }

    #[test]
    fn test_zero_wheel_radius_rejected() {
        let mut settings = Settings::default();
        settings.vehicle.wheel_radius = 0.0;
        assert!(matches!(
            Session::new(settings, 1),
            Err(TrackError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_tick_then_reset() {
        let mut session = Session::new(Settings::default(), 1).unwrap();
        let input = TickInput {
            forward: true,
            turn_left: true,
            ..Default::default()
        };
        for _ in 0..60 {
            session.tick(&input, 1.0 / 60.0);
        }
        assert_eq!(session.ticks, 60);
        assert!(session.vehicle().speed > 0.0);
        assert_ne!(session.vehicle().position(), session.track().start_line.position);

        session.reset_vehicle();
        assert_eq!(session.ticks, 0);
        assert_eq!(session.vehicle().speed, 0.0);
        assert_eq!(session.vehicle().wheel_spin_degrees, 0.0);
        assert_eq!(session.vehicle().position(), session.track().start_line.position);
    }

    #[test]
    fn test_regenerate_moves_vehicle_to_new_track() {
        let mut session = Session::new(Settings::default(), 1).unwrap();
        let old = session.track().clone();
        session.regenerate(2).unwrap();
        assert_ne!(session.track().centerline, old.centerline);
        assert_eq!(session.track().seed, 2);
        assert_eq!(session.vehicle().position(), session.track().start_line.position);
    }

    #[test]
    fn test_failed_regenerate_keeps_state() {
        let mut session = Session::new(Settings::default(), 1).unwrap();
        session.tick(
            &TickInput {
                forward: true,
                ..Default::default()
            },
            0.1,
        );
        let before_track = session.track().clone();
        let before_vehicle = *session.vehicle();

        session.settings.track = TrackConfig::with_shape(0, 12.0);
        assert!(session.regenerate(3).is_err());
        assert_eq!(session.track(), &before_track);
        assert_eq!(session.vehicle(), &before_vehicle);
    }
}
