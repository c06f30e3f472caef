/// A named point location on the map.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lon: f32,
    pub lat: f32,
}

/// Cities that get a clickable marker. Duplicate names or positions would be
/// legal; each entry spawns its own independently pickable marker.
pub const CITIES: [City; 3] = [
    City {
        name: "Taipei",
        lon: 121.5,
        lat: 25.05,
    },
    City {
        name: "Taichung",
        lon: 120.65,
        lat: 24.15,
    },
    City {
        name: "Tainan",
        lon: 120.2,
        lat: 23.0,
    },
];
