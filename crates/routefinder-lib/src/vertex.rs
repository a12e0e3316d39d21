use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`Vertex::haversine_distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Named point in the plane.
///
/// Coordinates are either Cartesian or `(latitude, longitude)` in degrees,
/// depending on where the graph came from. Identity is the name alone: two
/// vertices with the same name compare equal regardless of position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Straight-line distance to another vertex.
    pub fn euclidean_distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Great-circle distance in kilometres, reading `x` as latitude and `y`
    /// as longitude (degrees).
    pub fn haversine_distance(&self, other: &Self) -> f64 {
        haversine_km(self.x, self.y, other.x, other.y)
    }

    /// Name equality, spelled out for call sites that read better with it.
    pub fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Haversine distance between two `(lat, lng)` pairs given in degrees.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat1 - lat2;
    let dlng = lng1.to_radians() - lng2.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
