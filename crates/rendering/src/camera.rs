use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::camera_flight::CameraFlight;

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 20.0;
const MAX_DISTANCE: f32 = 800.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees (near ground level)
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Pixels of cursor travel before a left press stops being a click and
/// becomes an orbit drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// Orbital camera model: the camera orbits around a focus point on the ground.
#[derive(Resource)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Eye at (200, 200, 200) looking at the island center: the classic
        // 2.5D three-quarter view.
        transform_to_orbit(Vec3::splat(200.0), Vec3::ZERO)
    }
}

/// Tracks left-button press state: differentiates a click (which picks a
/// marker) from an orbit drag. When the cursor moves beyond
/// `CLICK_DRAG_THRESHOLD` pixels from the initial press, the press becomes a
/// camera drag and suppresses picking on release.
#[derive(Resource, Default)]
pub struct LeftDragState {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once the cursor has moved beyond the threshold.
    pub is_dragging: bool,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (eye, focus) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(focus, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

/// Spherical to cartesian: the camera eye position and look-at point for an
/// orbit state.
pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    (orbit.focus + Vec3::new(x, y, z), orbit.focus)
}

/// Cartesian back to spherical: reseeds the rig after something else (a
/// camera flight) has moved the camera directly.
pub fn transform_to_orbit(eye: Vec3, focus: Vec3) -> OrbitCamera {
    let offset = eye - focus;
    let distance = offset.length().max(f32::EPSILON);
    OrbitCamera {
        focus,
        yaw: offset.x.atan2(offset.z),
        pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
        distance,
    }
}

/// System: apply OrbitCamera state to the actual camera Transform each frame
/// it changes. While a flight is active the flight owns the transform and
/// this system stands down.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    flight: Res<CameraFlight>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if flight.current.is_some() || !orbit.is_changed() {
        return;
    }
    let (eye, focus) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(eye).looking_at(focus, Vec3::Y);
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch). Engaging a
/// drag cancels any camera flight in progress; direct control wins.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_q: Query<&Transform, With<Camera3d>>,
    mut drag: ResMut<LeftDragState>,
    mut flight: ResMut<CameraFlight>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.start_pos = pos;
            drag.last_pos = pos;
            drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
        drag.is_dragging = false;
    }

    if !drag.pressed {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };

    if !drag.is_dragging && (pos - drag.start_pos).length() > CLICK_DRAG_THRESHOLD {
        drag.is_dragging = true;
        drag.last_pos = pos;
        if let Some(active) = flight.current.take() {
            if let Ok(transform) = camera_q.get_single() {
                *orbit = transform_to_orbit(transform.translation, active.focus);
            }
        }
    }

    if drag.is_dragging {
        let delta = pos - drag.last_pos;
        orbit.yaw += delta.x * ORBIT_SENSITIVITY;
        orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
        drag.last_pos = pos;
    }
}

/// Scroll wheel: zoom (change distance). Also cancels an active flight.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    camera_q: Query<&Transform, With<Camera3d>>,
    mut flight: ResMut<CameraFlight>,
    mut orbit: ResMut<OrbitCamera>,
) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        if dy == 0.0 {
            continue;
        }
        if let Some(active) = flight.current.take() {
            if let Ok(transform) = camera_q.get_single() {
                *orbit = transform_to_orbit(transform.translation, active.focus);
            }
        }
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_reproduces_initial_eye() {
        let orbit = OrbitCamera::default();
        let (eye, focus) = orbit_to_transform(&orbit);
        assert!((eye - Vec3::splat(200.0)).length() < 1e-2);
        assert_eq!(focus, Vec3::ZERO);
    }

    #[test]
    fn test_orbit_transform_round_trip() {
        let original = OrbitCamera {
            focus: Vec3::new(10.0, 0.0, 77.5),
            yaw: 0.7,
            pitch: 0.9,
            distance: 120.0,
        };
        let (eye, focus) = orbit_to_transform(&original);
        let recovered = transform_to_orbit(eye, focus);
        assert!((recovered.yaw - original.yaw).abs() < 1e-4);
        assert!((recovered.pitch - original.pitch).abs() < 1e-4);
        assert!((recovered.distance - original.distance).abs() < 1e-2);
        assert!((recovered.focus - original.focus).length() < 1e-4);
    }

    #[test]
    fn test_transform_to_orbit_straight_above() {
        // Directly above the focus: pitch saturates at 90 degrees, yaw is
        // arbitrary but finite.
        let orbit = transform_to_orbit(Vec3::new(10.0, 51.0, 77.5), Vec3::new(10.0, 1.0, 77.5));
        assert!((orbit.pitch - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        assert!((orbit.distance - 50.0).abs() < 1e-3);
        assert!(orbit.yaw.is_finite());
    }
}
