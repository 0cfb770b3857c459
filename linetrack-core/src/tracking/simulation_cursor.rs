use serde::{Deserialize, Serialize};

use crate::itinerary::Itinerary;

/// elapsed share of a full itinerary window, as a percentage in [0, 100].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(transparent)]
pub struct SimulationCursor(f64);

impl SimulationCursor {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// builds a cursor, clamping into [0, 100]. non-finite values become 0.
    pub fn new(percent: f64) -> SimulationCursor {
        if !percent.is_finite() {
            log::warn!("simulation cursor value {percent} is not finite, using 0");
            return SimulationCursor(Self::MIN);
        }
        SimulationCursor(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    pub fn fraction(&self) -> f64 {
        self.0 / Self::MAX
    }

    /// moves the cursor by `delta` percentage points, staying within bounds
    pub fn advanced_by(&self, delta: f64) -> SimulationCursor {
        SimulationCursor::new(self.0 + delta)
    }

    /// maps the cursor linearly onto the itinerary window, returning
    /// fractional seconds since midnight. None for an empty itinerary.
    pub fn resolve_seconds(&self, itinerary: &Itinerary) -> Option<f64> {
        let first = itinerary.trips().first()?;
        let last = itinerary.trips().last()?;
        let start = first.start_seconds() as f64;
        let end = last.end_seconds() as f64;
        Some(start + self.fraction() * (end - start))
    }
}
