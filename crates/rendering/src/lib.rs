use bevy::prelude::*;
use bevy::window::WindowResized;

pub mod camera;
pub mod camera_flight;
pub mod island;
pub mod markers;
pub mod picking;

use camera::LeftDragState;
use camera_flight::CameraFlight;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LeftDragState>()
            .init_resource::<CameraFlight>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    island::spawn_island,
                    markers::spawn_markers,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    // Picking reads the drag state before the drag system
                    // resets it on release.
                    picking::pick_marker_on_click.before(camera::camera_orbit_drag),
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera_flight::advance_flight
                        .after(picking::pick_marker_on_click)
                        .after(camera::camera_orbit_drag)
                        .after(camera::camera_zoom),
                    camera::apply_orbit_camera.after(camera_flight::advance_flight),
                ),
            )
            .add_systems(Update, log_window_resize);
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.4, 0.4),
        brightness: 300.0,
    });

    // Directional light (sun) above and to the side of the island
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(100.0, 200.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// The engine refreshes the camera projection and the output surface on
/// resize; the app just notes the new size.
fn log_window_resize(mut resize_evts: EventReader<WindowResized>) {
    for evt in resize_evts.read() {
        debug!("window resized to {}x{}", evt.width, evt.height);
    }
}
