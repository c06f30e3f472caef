/// Scene units per degree of longitude/latitude.
pub const MAP_SCALE: f32 = 50.0;

/// Reference coordinate subtracted (scaled) from every projected point so the
/// island sits roughly centered on the scene origin.
pub const REF_LON: f32 = 121.3;
pub const REF_LAT: f32 = 23.5;

pub const OFFSET_X: f32 = -REF_LON * MAP_SCALE;
pub const OFFSET_Y: f32 = -REF_LAT * MAP_SCALE;

/// Extrusion depth of the island prism, in scene units.
pub const ISLAND_DEPTH: f32 = 2.0;

/// City marker cone dimensions.
pub const MARKER_RADIUS: f32 = 1.0;
pub const MARKER_HEIGHT: f32 = 5.0;
pub const MARKER_SEGMENTS: u32 = 16;

/// Height of a marker's center above the ground plane.
pub const MARKER_ALTITUDE: f32 = 1.0;

/// Camera flight: seconds from pick to arrival, and how far above the picked
/// marker the camera ends up.
pub const FLIGHT_DURATION: f32 = 1.0;
pub const FLIGHT_HEIGHT: f32 = 50.0;
