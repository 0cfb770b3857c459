use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    model::Coordinate,
    tracking::{DeviationResult, LocatedPosition, ProgressMode, SimulationCursor},
};

/// the output of one recomputation, ready to be rendered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackingSnapshot {
    pub clock: NaiveTime,
    pub mode: ProgressMode,
    pub cursor: Option<SimulationCursor>,
    pub manual_stop_index: usize,
    /// where the schedule places the vehicle at `clock`
    pub located: Option<LocatedPosition>,
    pub deviation: DeviationResult,
    /// signed `mm:ss` rendering of the deviation
    pub formatted_deviation: String,
    /// simulated, reported or manually selected vehicle position
    pub vehicle_position: Option<Coordinate>,
}

impl TrackingSnapshot {
    /// start and end of the active trip
    pub fn active_trip_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.located.map(|l| (l.trip_start, l.trip_end))
    }
}
