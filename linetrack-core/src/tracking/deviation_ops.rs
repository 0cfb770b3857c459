use crate::{
    itinerary::Itinerary,
    tracking::{ActualProgress, DeviationResult, ExpectedPosition},
    util::time_ops,
};

/// compares actual progress against the schedule on the active trip.
///
/// `deviation_seconds = actual progress time − expected schedule time`,
/// rounded to whole seconds. the next stop is the first stop on the active
/// trip lying strictly beyond the actual progress, or the trip's last stop
/// once it has been reached.
///
/// # Arguments
///
/// * `itinerary` - the itinerary the expected position was located on
/// * `expected`  - the mapper's result, None when nothing could be located
/// * `actual`    - the progress source selected by the current mode
///
/// # Returns
///
/// * the deviation, or the neutral result when no active trip can be
///   resolved. this never fails.
pub fn compute_deviation(
    itinerary: &Itinerary,
    expected: Option<&ExpectedPosition>,
    actual: &ActualProgress,
) -> DeviationResult {
    let Some(expected) = expected else {
        return DeviationResult::neutral();
    };
    let Some(trip) = itinerary.get(expected.trip_index) else {
        log::debug!(
            "trip {} is not part of an itinerary of {} trips",
            expected.trip_index,
            itinerary.len()
        );
        return DeviationResult::neutral();
    };
    let Some(progress) = actual.resolve(itinerary, trip) else {
        log::debug!("unable to place {actual:?} on trip {}", expected.trip_index);
        return DeviationResult::neutral();
    };

    let expected_seconds = expected.expected_seconds();
    let deviation_seconds = (progress.seconds - expected_seconds).round() as i64;
    let next_stop_index = trip.next_stop_index(progress.fraction);
    let next_stop = next_stop_index.and_then(|idx| trip.stops.get(idx));

    DeviationResult {
        deviation_seconds,
        next_stop_name: next_stop.map(|s| s.name.clone()).unwrap_or_default(),
        current_trip_index: expected.trip_index,
        next_stop_index,
        next_stop_time: next_stop.map(|s| s.time),
        expected_time: Some(time_ops::time_from_fractional_seconds(expected_seconds)),
    }
}

#[cfg(test)]
mod tests {
    use super::compute_deviation;
    use crate::itinerary::{calculate_itinerary, Itinerary};
    use crate::tracking::{locate, ActualProgress, ClockPosition, ExpectedPosition, SimulationCursor};
    use crate::util::time_ops;
    use chrono::NaiveTime;
    use serde_json::json;

    /// Ida A B C over 10:00-10:20 (B at 10:10), Vuelta C A over 10:20-10:40
    fn itinerary() -> Itinerary {
        let ida = serde_json::from_value(json!({
            "id": "ida", "name": "A-C",
            "stops": [
                {"name": "A", "lat": 0.0, "lng": 0.0, "time": "08:00"},
                {"name": "B", "lat": 0.0, "lng": 1.0, "time": "08:10"},
                {"name": "C", "lat": 0.0, "lng": 3.0, "time": "08:20"}
            ]
        }))
        .expect("route should parse");
        let vuelta = serde_json::from_value(json!({
            "id": "vuelta", "name": "C-A",
            "stops": [
                {"name": "C", "lat": 0.0, "lng": 3.0, "time": "09:00"},
                {"name": "A", "lat": 0.0, "lng": 0.0, "time": "09:20"}
            ]
        }))
        .expect("route should parse");
        let line = serde_json::from_value(json!({
            "id": "L", "name": "L", "routeIdaId": "ida", "routeVueltaId": "vuelta",
            "startTime": "10:00", "endTime": "10:40", "turns": 1
        }))
        .expect("line should parse");
        calculate_itinerary(&line, &ida, &vuelta).expect("itinerary should compute")
    }

    fn time(value: &str) -> NaiveTime {
        time_ops::parse_clock_time(value).expect("valid time")
    }

    fn expected_at(itinerary: &Itinerary, value: &str) -> ExpectedPosition {
        locate(itinerary, &ClockPosition::WallClock(time(value)))
            .expect("should locate")
            .expected()
    }

    #[test]
    fn test_on_schedule_has_zero_deviation() {
        let it = itinerary();
        let expected = expected_at(&it, "10:05");
        let result = compute_deviation(&it, Some(&expected), &ActualProgress::Clock(time("10:05")));
        assert_eq!(result.deviation_seconds, 0);
        assert_eq!(result.next_stop_name, "B");
        assert_eq!(result.next_stop_index, Some(1));
        assert_eq!(result.next_stop_time, Some(time("10:10")));
        assert_eq!(result.expected_time, Some(time("10:05")));
        assert_eq!(result.current_trip_index, 0);
    }

    #[test]
    fn test_deviation_is_actual_minus_expected() {
        let it = itinerary();
        let expected = expected_at(&it, "10:05");

        let at_first_stop = compute_deviation(&it, Some(&expected), &ActualProgress::ManualStop(0));
        assert_eq!(at_first_stop.deviation_seconds, -300);
        assert_eq!(at_first_stop.formatted_deviation(), "-05:00");

        let at_second_stop = compute_deviation(&it, Some(&expected), &ActualProgress::ManualStop(1));
        assert_eq!(at_second_stop.deviation_seconds, 300);
        assert_eq!(at_second_stop.formatted_deviation(), "+05:00");
        assert_eq!(at_second_stop.next_stop_name, "C");
    }

    #[test]
    fn test_next_stop_at_trip_boundaries() {
        let it = itinerary();
        let expected = expected_at(&it, "10:00");
        let departing = compute_deviation(&it, Some(&expected), &ActualProgress::Clock(time("10:00")));
        assert_eq!(departing.next_stop_name, "B");

        let arrived = compute_deviation(&it, Some(&expected), &ActualProgress::ManualStop(2));
        assert_eq!(arrived.next_stop_name, "C");
        assert_eq!(arrived.next_stop_index, Some(2));
    }

    #[test]
    fn test_deviation_vanishes_when_actual_matches_expected() {
        let it = itinerary();
        for step in 0..=100 {
            let cursor = SimulationCursor::new(step as f64);
            let expected = locate(&it, &ClockPosition::Cursor(cursor))
                .expect("should locate")
                .expected();
            let result = compute_deviation(&it, Some(&expected), &ActualProgress::Cursor(cursor));
            assert_eq!(result.deviation_seconds, 0, "cursor {step}");
        }
    }

    #[test]
    fn test_deviation_shrinks_as_schedule_catches_up() {
        let it = itinerary();
        let actual = ActualProgress::Clock(time("10:15"));
        let mut previous = i64::MAX;
        for minute in 0..=15 {
            let expected = expected_at(&it, &format!("10:{minute:02}"));
            let result = compute_deviation(&it, Some(&expected), &actual);
            assert!(result.deviation_seconds >= 0);
            assert!(result.deviation_seconds <= previous, "minute {minute}");
            previous = result.deviation_seconds;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_unresolvable_inputs_are_neutral() {
        let it = itinerary();
        let empty = Itinerary::default();
        let actual = ActualProgress::Clock(time("10:05"));
        assert!(compute_deviation(&it, None, &actual).is_neutral());

        let expected = expected_at(&it, "10:05");
        assert!(compute_deviation(&empty, Some(&expected), &actual).is_neutral());

        let unknown_trip = ExpectedPosition {
            trip_index: 7,
            ..expected
        };
        let result = compute_deviation(&it, Some(&unknown_trip), &actual);
        assert!(result.is_neutral());
        assert_eq!(result.deviation_seconds, 0);
    }
}
