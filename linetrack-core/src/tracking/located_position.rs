use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{model::Coordinate, util::time_ops};

/// where the schedule places a vehicle on its active trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ExpectedPosition {
    pub trip_index: usize,
    /// elapsed share of the active trip, in [0, 1]
    pub leg_fraction: f64,
    pub trip_start: NaiveTime,
    pub trip_end: NaiveTime,
}

impl ExpectedPosition {
    /// `trip_start + leg_fraction × (trip_end − trip_start)` in fractional seconds since midnight
    pub fn expected_seconds(&self) -> f64 {
        let start = time_ops::seconds_from_midnight(&self.trip_start) as f64;
        let end = time_ops::seconds_from_midnight(&self.trip_end) as f64;
        start + self.leg_fraction * (end - start)
    }
}

/// result of mapping a clock position onto an itinerary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LocatedPosition {
    pub trip_index: usize,
    pub leg_fraction: f64,
    /// interpolated position between the two stops straddling `leg_fraction`
    pub position: Coordinate,
    /// the clock position resolved to fractional seconds since midnight
    pub resolved_seconds: f64,
    pub trip_start: NaiveTime,
    pub trip_end: NaiveTime,
    /// the resolved time fell in the rest before the selected trip
    pub in_rest: bool,
    /// the resolved time was outside of the itinerary window
    pub clamped: bool,
}

impl LocatedPosition {
    pub fn expected(&self) -> ExpectedPosition {
        ExpectedPosition {
            trip_index: self.trip_index,
            leg_fraction: self.leg_fraction,
            trip_start: self.trip_start,
            trip_end: self.trip_end,
        }
    }
}
