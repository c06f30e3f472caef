use bevy::prelude::*;

use crate::config::{MAP_SCALE, OFFSET_X, OFFSET_Y};

/// Project a longitude/latitude pair into scene units.
///
/// Equirectangular with a single linear scale: `x = lon * scale + offset_x`,
/// `y = lat * scale + offset_y`. At island scale the distortion is invisible,
/// so nothing fancier is warranted.
pub fn project(lon: f32, lat: f32) -> Vec2 {
    Vec2::new(lon * MAP_SCALE + OFFSET_X, lat * MAP_SCALE + OFFSET_Y)
}

/// Ground-plane position for a coordinate: projected x stays on X, the
/// projected second component lands on Z.
pub fn ground_position(lon: f32, lat: f32, altitude: f32) -> Vec3 {
    let p = project(lon, lat);
    Vec3::new(p.x, altitude, p.y)
}
