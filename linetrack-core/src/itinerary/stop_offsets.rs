use itertools::Itertools;

use crate::{itinerary::ItineraryError, model::Route, util::time_ops};

/// relative position of each stop within its route, from its nominal time.
///
/// the first stop sits at 0 and the last at 1. when the route's nominal times
/// span zero seconds, stops are spaced evenly by index instead.
///
/// # Arguments
///
/// * `route` - route with at least two stops
///
/// # Returns
///
/// * one fraction per stop, non-decreasing, or an error if the route is too
///   short or its nominal times run backwards
pub fn stop_offset_fractions(route: &Route) -> Result<Vec<f64>, ItineraryError> {
    if route.stops.len() < 2 {
        return Err(ItineraryError::invalid_config(format!(
            "route '{}' has {} stop(s), at least 2 are required",
            route.id,
            route.stops.len()
        )));
    }
    let seconds = route
        .stops
        .iter()
        .map(|s| time_ops::seconds_from_midnight(&s.time))
        .collect_vec();
    if let Some((idx, _)) = seconds
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| b < a)
    {
        return Err(ItineraryError::invalid_config(format!(
            "route '{}' nominal times run backwards at stop '{}'",
            route.id,
            route.stops[idx + 1].name
        )));
    }

    let first = seconds[0];
    let span = seconds[seconds.len() - 1] - first;
    let fractions = if span == 0 {
        log::warn!(
            "route '{}' has no nominal time span, spacing its stops evenly",
            route.id
        );
        let last_index = (seconds.len() - 1) as f64;
        (0..seconds.len()).map(|i| i as f64 / last_index).collect()
    } else {
        seconds
            .iter()
            .map(|s| (s - first) as f64 / span as f64)
            .collect()
    };
    Ok(fractions)
}
