use chrono::NaiveTime;
use geo::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    itinerary::Itinerary,
    model::{Coordinate, Trip},
    tracking::SimulationCursor,
    util::{geo_utils, time_ops},
};

/// the reference the deviation tracker compares against the schedule. AUTO
/// mode feeds a clock, a cursor or a reported position, MANUAL mode feeds
/// the operator's stop index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ActualProgress {
    /// the vehicle is where the schedule says it is at this time of day
    Clock(NaiveTime),
    /// the vehicle is at this share of the itinerary window
    Cursor(SimulationCursor),
    /// the vehicle is at this stop of the active trip
    ManualStop(usize),
    /// the vehicle reported this coordinate
    Position(Coordinate),
}

/// actual progress resolved against the active trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProgress {
    /// schedule time matching the actual progress, fractional seconds since midnight
    pub seconds: f64,
    /// share of the active trip covered, in [0, 1]
    pub fraction: f64,
}

impl ActualProgress {
    /// places this progress on the active trip.
    ///
    /// # Arguments
    ///
    /// * `itinerary` - the itinerary a cursor is resolved against
    /// * `trip`      - the active trip
    ///
    /// # Returns
    ///
    /// * the resolved progress, or None when it cannot be placed (an empty
    ///   itinerary for a cursor, a trip without stops for a manual index or a
    ///   reported position)
    pub fn resolve(&self, itinerary: &Itinerary, trip: &Trip) -> Option<ResolvedProgress> {
        match self {
            ActualProgress::Clock(time) => {
                let seconds = time_ops::seconds_from_midnight(time) as f64;
                Some(ResolvedProgress {
                    seconds,
                    fraction: trip.fraction_at(seconds),
                })
            }
            ActualProgress::Cursor(cursor) => {
                let seconds = cursor.resolve_seconds(itinerary)?;
                Some(ResolvedProgress {
                    seconds,
                    fraction: trip.fraction_at(seconds),
                })
            }
            ActualProgress::ManualStop(stop_index) => {
                let index = (*stop_index).min(trip.stops.len().checked_sub(1)?);
                Some(ResolvedProgress {
                    seconds: trip.stop_seconds(index)?,
                    fraction: trip.stops.get(index)?.offset_fraction,
                })
            }
            ActualProgress::Position(coordinate) => {
                let fraction = projected_fraction(trip, coordinate)?;
                Some(ResolvedProgress {
                    seconds: trip.seconds_at(fraction),
                    fraction,
                })
            }
        }
    }
}

/// share of the trip covered at the point of its route geometry closest to
/// `coordinate`. each stop-to-stop segment maps linearly onto the offsets of
/// its two stops.
fn projected_fraction(trip: &Trip, coordinate: &Coordinate) -> Option<f64> {
    let point = Point::from(*coordinate);
    trip.route
        .stops
        .iter()
        .tuple_windows()
        .zip(trip.stops.iter().tuple_windows())
        .filter_map(|((from, to), (timed_from, timed_to))| {
            let segment = geo_utils::segment_linestring(from, to);
            let projection = geo_utils::project_onto_linestring(&segment, &point)?;
            let span = timed_to.offset_fraction - timed_from.offset_fraction;
            let fraction = timed_from.offset_fraction + projection.ratio * span;
            Some((projection.distance, fraction))
        })
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, fraction)| fraction.clamp(0.0, 1.0))
}
