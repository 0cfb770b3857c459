use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{model::Coordinate, util::time_ops};

/// a named stop along a route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// nominal time within the owning route. only the spacing between stops
    /// matters, it is never used as an absolute departure time.
    #[serde(
        deserialize_with = "time_ops::deserialize_clock_time",
        serialize_with = "time_ops::serialize_clock_time"
    )]
    pub time: NaiveTime,
    /// traced street path from this stop toward the next one, excluding both stops.
    #[serde(default, rename = "pathNext", skip_serializing_if = "Vec::is_empty")]
    pub path_next: Vec<Coordinate>,
}

impl Stop {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}
