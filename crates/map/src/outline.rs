use bevy::prelude::*;

use crate::projection;

/// Coastline of Taiwan as (longitude, latitude) pairs, running south along
/// the east coast and back north along the west. Nine points are plenty at
/// this level of stylization.
pub const TAIWAN_OUTLINE: [[f32; 2]; 9] = [
    [121.8, 25.3],
    [122.0, 24.5],
    [121.9, 23.5],
    [121.3, 22.6],
    [120.8, 21.9],
    [120.2, 22.2],
    [120.3, 23.2],
    [120.5, 24.1],
    [121.1, 24.9],
];

/// The outline projected into scene units, in input order. The polygon is
/// closed implicitly: the last vertex connects back to the first.
pub fn outline_path() -> Vec<Vec2> {
    TAIWAN_OUTLINE
        .iter()
        .map(|&[lon, lat]| projection::project(lon, lat))
        .collect()
}
