use bevy::prelude::*;
use bevy::window::PresentMode;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Formosa".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Hazy sky backdrop behind the island
        .insert_resource(ClearColor(Color::srgb_u8(191, 209, 229)))
        .add_plugins(rendering::RenderingPlugin)
        .run();
}
