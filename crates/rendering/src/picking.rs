//! Click picking: cursor position to world ray to nearest marker, which
//! kicks off a camera flight.
//!
//! Runs on left-button release and only when the press never turned into an
//! orbit drag, so it must be ordered before the drag system clears its state
//! for the frame.

use bevy::prelude::*;

use map::config::{MARKER_HEIGHT, MARKER_RADIUS};

use crate::camera::LeftDragState;
use crate::camera_flight::{CameraFlight, Flight};
use crate::markers::CityMarker;

/// Radius of the bounding sphere standing in for a marker cone in ray tests:
/// circumscribes the cone from its center through the base rim.
pub fn marker_pick_radius() -> f32 {
    let half_height = MARKER_HEIGHT * 0.5;
    (MARKER_RADIUS * MARKER_RADIUS + half_height * half_height).sqrt()
}

/// Smallest positive `t` along `origin + t * direction` where the ray meets
/// the sphere, or `None` on a miss. `direction` must be normalized.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_origin = origin - center;
    let b = to_origin.dot(direction);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_discriminant = discriminant.sqrt();
    let near = -b - sqrt_discriminant;
    if near > 0.0 {
        return Some(near);
    }
    // Ray starts inside the sphere: the far root is the exit point.
    let far = -b + sqrt_discriminant;
    (far > 0.0).then_some(far)
}

/// System: on a completed click, cast a ray through the cursor and fly the
/// camera to the nearest marker hit. A miss is a no-op.
pub fn pick_marker_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    drag: Res<LeftDragState>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform, &Transform), With<Camera3d>>,
    markers: Query<(&CityMarker, &Transform)>,
    mut flight: ResMut<CameraFlight>,
) {
    if !buttons.just_released(MouseButton::Left) || drag.is_dragging {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_global, camera_transform)) = camera_q.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_global, cursor_pos) else {
        return;
    };

    let radius = marker_pick_radius();
    let mut nearest: Option<(f32, &CityMarker, Vec3)> = None;
    for (marker, transform) in &markers {
        let Some(distance) =
            ray_sphere_intersection(ray.origin, *ray.direction, transform.translation, radius)
        else {
            continue;
        };
        if nearest.is_none_or(|(best, _, _)| distance < best) {
            nearest = Some((distance, marker, transform.translation));
        }
    }

    let Some((_, marker, target)) = nearest else {
        return;
    };
    info!("flying to {}", marker.name);
    flight.current = Some(Flight::to_marker(camera_transform.translation, target));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_on_hit_distance() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!((hit.unwrap() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_returns_none() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 10.0), 2.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_sphere_behind_ray_returns_none() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_origin_inside_sphere_hits_exit() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 1.0), 2.0);
        assert!((hit.unwrap() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearer_sphere_has_smaller_distance() {
        let near =
            ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 10.0), 2.0).unwrap();
        let far =
            ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 30.0), 2.0).unwrap();
        assert!(near < far);
    }

    #[test]
    fn test_pick_radius_covers_the_cone() {
        let radius = marker_pick_radius();
        let rim = Vec3::new(MARKER_RADIUS, -MARKER_HEIGHT * 0.5, 0.0);
        let apex = Vec3::new(0.0, MARKER_HEIGHT * 0.5, 0.0);
        assert!(rim.length() <= radius + 1e-4);
        assert!(apex.length() <= radius + 1e-4);
    }
}
