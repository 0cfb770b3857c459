use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::Trip;

/// ordered trips covering a line's service window, separated only by rests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Itinerary {
    trips: Vec<Trip>,
}

impl Itinerary {
    pub fn new(trips: Vec<Trip>) -> Itinerary {
        Itinerary { trips }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.trips.get(index)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// start of the first trip
    pub fn window_start(&self) -> Option<NaiveTime> {
        self.trips.first().map(|t| t.start_time)
    }

    /// end of the last trip
    pub fn window_end(&self) -> Option<NaiveTime> {
        self.trips.last().map(|t| t.end_time)
    }

    /// seconds of rest between the trip at `index` and the one after it
    pub fn rest_after(&self, index: usize) -> Option<i64> {
        let current = self.trips.get(index)?;
        let next = self.trips.get(index + 1)?;
        Some(next.start_seconds() - current.end_seconds())
    }

    pub fn total_driving_seconds(&self) -> i64 {
        self.trips.iter().map(|t| t.duration_seconds()).sum()
    }

    pub fn total_rest_seconds(&self) -> i64 {
        (0..self.trips.len())
            .filter_map(|i| self.rest_after(i))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
