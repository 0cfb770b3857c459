use chrono::NaiveTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    model::{Coordinate, Direction, Route, TimedStop},
    util::time_ops,
};

/// a single directional traversal of a route within an itinerary (a leg).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub direction: Direction,
    /// 1-based position of this leg in the itinerary
    pub leg_index: usize,
    /// 0-based turn this leg belongs to
    pub turn_index: usize,
    /// the source route this leg traverses
    pub route: Route,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// route stops with their rescaled times on this leg
    pub stops: Vec<TimedStop>,
}

impl Trip {
    pub fn start_seconds(&self) -> i64 {
        time_ops::seconds_from_midnight(&self.start_time)
    }

    pub fn end_seconds(&self) -> i64 {
        time_ops::seconds_from_midnight(&self.end_time)
    }

    pub fn duration_seconds(&self) -> i64 {
        self.end_seconds() - self.start_seconds()
    }

    /// true when `seconds` (since midnight) falls within [start, end)
    pub fn contains_seconds(&self, seconds: f64) -> bool {
        self.start_seconds() as f64 <= seconds && seconds < self.end_seconds() as f64
    }

    /// fraction of this leg elapsed at `seconds`, clamped to [0, 1]
    pub fn fraction_at(&self, seconds: f64) -> f64 {
        let duration = self.duration_seconds() as f64;
        if duration <= 0.0 {
            return 0.0;
        }
        ((seconds - self.start_seconds() as f64) / duration).clamp(0.0, 1.0)
    }

    /// scheduled time (fractional seconds since midnight) at a leg fraction
    pub fn seconds_at(&self, fraction: f64) -> f64 {
        self.start_seconds() as f64 + fraction.clamp(0.0, 1.0) * self.duration_seconds() as f64
    }

    /// exact rescaled time at a stop, before truncation to whole seconds
    pub fn stop_seconds(&self, stop_index: usize) -> Option<f64> {
        self.stops
            .get(stop_index)
            .map(|stop| self.seconds_at(stop.offset_fraction))
    }

    /// approximate position at a leg fraction, interpolated between the two
    /// stops whose rescaled times straddle it.
    pub fn position_at(&self, fraction: f64) -> Option<Coordinate> {
        let f = fraction.clamp(0.0, 1.0);
        let straddling = self
            .stops
            .iter()
            .tuple_windows()
            .find(|(_, b)| f <= b.offset_fraction);
        match straddling {
            Some((a, b)) => {
                let span = b.offset_fraction - a.offset_fraction;
                let ratio = if span > 0.0 {
                    (f - a.offset_fraction) / span
                } else {
                    0.0
                };
                Some(a.coordinate.lerp(&b.coordinate, ratio))
            }
            None => self.stops.last().map(|s| s.coordinate),
        }
    }

    /// index of the first stop strictly beyond `fraction`. once the leg position
    /// reaches the last stop, the last stop is reported.
    pub fn next_stop_index(&self, fraction: f64) -> Option<usize> {
        self.stops
            .iter()
            .position(|stop| stop.offset_fraction > fraction)
            .or_else(|| self.stops.len().checked_sub(1))
    }

    pub fn first_stop(&self) -> Option<&TimedStop> {
        self.stops.first()
    }

    pub fn last_stop(&self) -> Option<&TimedStop> {
        self.stops.last()
    }
}
