use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

/// a route stop placed on a concrete trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimedStop {
    pub name: String,
    pub coordinate: Coordinate,
    /// proportional position of this stop within its leg, in [0, 1]. the first
    /// stop is always 0 and the last stop is always 1.
    pub offset_fraction: f64,
    /// scheduled time at this stop, truncated to whole seconds
    pub time: NaiveTime,
}
