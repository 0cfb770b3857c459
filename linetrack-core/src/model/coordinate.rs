use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// a WGS84 position. geometry conversions place longitude on x and latitude on y.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// linear interpolation toward `other`, with `ratio` clamped to [0, 1].
    pub fn lerp(&self, other: &Coordinate, ratio: f64) -> Coordinate {
        let r = ratio.clamp(0.0, 1.0);
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * r,
            lng: self.lng + (other.lng - self.lng) * r,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate {
            lat: value.y,
            lng: value.x,
        }
    }
}
