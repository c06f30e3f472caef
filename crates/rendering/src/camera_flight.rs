//! Timed camera flights toward a picked marker.
//!
//! A flight is plain data advanced by a schedule-driven system: each frame it
//! lerps the camera eye from where the click happened to a viewpoint above
//! the target, re-aiming at the target as it goes. The `Option` slot in
//! [`CameraFlight`] doubles as the cancellation token: overwriting or
//! clearing it stops the previous flight from ever touching the camera
//! again, so at most one flight writes the camera per frame.

use bevy::prelude::*;

use map::config::{FLIGHT_DURATION, FLIGHT_HEIGHT};

use crate::camera::{self, OrbitCamera};

/// One camera flight: lerp the eye from `start` to `eye_target` over
/// `duration` seconds while aiming at `focus`.
#[derive(Debug, Clone)]
pub struct Flight {
    pub start: Vec3,
    pub eye_target: Vec3,
    pub focus: Vec3,
    pub elapsed: f32,
    pub duration: f32,
}

impl Flight {
    /// Flight from the camera's current eye position to a viewpoint
    /// `FLIGHT_HEIGHT` above `target`.
    pub fn to_marker(start: Vec3, target: Vec3) -> Self {
        Self {
            start,
            eye_target: target + Vec3::Y * FLIGHT_HEIGHT,
            focus: target,
            elapsed: 0.0,
            duration: FLIGHT_DURATION,
        }
    }
}

/// The currently running flight, if any.
#[derive(Resource, Default)]
pub struct CameraFlight {
    pub current: Option<Flight>,
}

/// Normalized progress through a flight, clamped to [0, 1].
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Eye position at progress `t`.
pub fn flight_eye(flight: &Flight, t: f32) -> Vec3 {
    flight.start.lerp(flight.eye_target, t)
}

/// System: advance the active flight and drive the camera transform.
///
/// On arrival the orbit rig is reseeded from the final pose and the slot is
/// cleared, handing the camera back to direct control.
pub fn advance_flight(
    time: Res<Time>,
    mut flight: ResMut<CameraFlight>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_q: Query<&mut Transform, With<Camera3d>>,
) {
    let Some(active) = flight.current.as_mut() else {
        return;
    };
    let Ok(mut transform) = camera_q.get_single_mut() else {
        return;
    };

    active.elapsed += time.delta_secs();
    let t = progress(active.elapsed, active.duration);
    let focus = active.focus;
    transform.translation = flight_eye(active, t);
    transform.look_at(focus, Vec3::Y);

    if t >= 1.0 {
        *orbit = camera::transform_to_orbit(transform.translation, focus);
        flight.current = None;
    }
}
