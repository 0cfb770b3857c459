use serde::{Deserialize, Serialize};

/// direction of an operator step through the stops of the active trip
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Forward,
    Backward,
}

/// the stop an operator says the vehicle is at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManualOverride {
    pub stop_index: usize,
}

impl ManualOverride {
    pub fn new(stop_index: usize) -> ManualOverride {
        ManualOverride { stop_index }
    }

    /// moves to the next stop, never beyond the last of `stop_count` stops
    pub fn increment(&mut self, stop_count: usize) {
        let last = stop_count.saturating_sub(1);
        self.stop_index = (self.stop_index + 1).min(last);
    }

    /// moves to the previous stop, never before the first
    pub fn decrement(&mut self) {
        self.stop_index = self.stop_index.saturating_sub(1);
    }

    pub fn step(&mut self, direction: StepDirection, stop_count: usize) {
        match direction {
            StepDirection::Forward => self.increment(stop_count),
            StepDirection::Backward => self.decrement(),
        }
    }

    /// pulls the index back into `[0, stop_count − 1]`, e.g. after the active
    /// trip changed to a route with fewer stops
    pub fn clamp(&mut self, stop_count: usize) {
        self.stop_index = self.stop_index.min(stop_count.saturating_sub(1));
    }
}
