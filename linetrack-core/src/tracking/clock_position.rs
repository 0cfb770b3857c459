use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{itinerary::Itinerary, tracking::SimulationCursor, util::time_ops};

/// where on the clock the position mapper should look: a simulated share of
/// the itinerary window or a literal time of day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ClockPosition {
    Cursor(SimulationCursor),
    WallClock(NaiveTime),
}

impl ClockPosition {
    /// fractional seconds since midnight. a cursor cannot resolve against an empty itinerary.
    pub fn resolve_seconds(&self, itinerary: &Itinerary) -> Option<f64> {
        match self {
            ClockPosition::Cursor(cursor) => cursor.resolve_seconds(itinerary),
            ClockPosition::WallClock(time) => Some(time_ops::seconds_from_midnight(time) as f64),
        }
    }
}
