use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    model::{Coordinate, LineDefinitions},
    tracking::{ProgressMode, StepDirection},
};

/// an external trigger for one recomputation of a tracking session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TrackingEvent {
    /// the wall clock advanced
    Tick(NaiveTime),
    /// the simulation cursor moved to this percentage of the window
    CursorMoved(f64),
    /// the simulation cursor was removed, progress follows the clock again
    CursorCleared,
    /// a live position was reported, or lost when None
    PositionReported(Option<Coordinate>),
    /// the operator stepped through the stops of the active trip
    ManualStep(StepDirection),
    /// the operator selected a stop of the active trip directly
    ManualStopSelected(usize),
    ModeSwitched(ProgressMode),
    /// the line or one of its routes was edited
    DefinitionsChanged(LineDefinitions),
}
