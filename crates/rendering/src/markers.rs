//! City markers: one small red cone per named city.

use bevy::prelude::*;

use map::cities::{City, CITIES};
use map::config::{MARKER_ALTITUDE, MARKER_HEIGHT, MARKER_RADIUS, MARKER_SEGMENTS};
use map::projection;

/// Display name for a marker entity. Every entity carrying this component is
/// a pick target; duplicates by name or position are each pickable on their
/// own.
#[derive(Component)]
pub struct CityMarker {
    pub name: &'static str,
}

/// Where a city's marker sits: the projected ground position at marker
/// altitude.
pub fn marker_position(city: &City) -> Vec3 {
    projection::ground_position(city.lon, city.lat, MARKER_ALTITUDE)
}

pub fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // One cone mesh and one material shared by every marker.
    let cone = meshes.add(
        Cone::new(MARKER_RADIUS, MARKER_HEIGHT)
            .mesh()
            .resolution(MARKER_SEGMENTS),
    );
    let red = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        ..default()
    });

    for city in &CITIES {
        commands.spawn((
            Mesh3d(cone.clone()),
            MeshMaterial3d(red.clone()),
            Transform::from_translation(marker_position(city)),
            CityMarker { name: city.name },
        ));
    }
    info!("spawned {} city markers", CITIES.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taipei_marker_position() {
        let taipei = CITIES.iter().find(|city| city.name == "Taipei").unwrap();
        let position = marker_position(taipei);
        assert!((position - Vec3::new(10.0, 1.0, 77.5)).length() < 1e-2);
    }

    #[test]
    fn test_markers_sit_at_marker_altitude() {
        for city in &CITIES {
            assert_eq!(marker_position(city).y, MARKER_ALTITUDE);
        }
    }
}
