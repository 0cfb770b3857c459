use crate::{
    itinerary::Itinerary,
    tracking::{ClockPosition, LocatedPosition},
};

/// finds the active trip for a clock position and the vehicle's scheduled place on it.
///
/// a time within a trip's [start, end) selects that trip. a time inside the
/// rest before a trip selects that trip at fraction 0, the vehicle is about
/// to depart. times before the first trip clamp to its start, times at or
/// after the last trip's end clamp to its end.
///
/// # Arguments
///
/// * `itinerary` - trips to search
/// * `clock`     - a simulation cursor or a wall-clock time
///
/// # Returns
///
/// * the located position, or None when the itinerary is empty. an empty
///   itinerary is a "not yet tracking" state, not an error.
pub fn locate(itinerary: &Itinerary, clock: &ClockPosition) -> Option<LocatedPosition> {
    let seconds = clock.resolve_seconds(itinerary)?;
    let first = itinerary.trips().first()?;
    let last = itinerary.trips().last()?;

    let (trip_index, leg_fraction, in_rest, clamped) = if seconds < first.start_seconds() as f64 {
        log::debug!("{seconds}s precedes the itinerary, clamping to its first trip");
        (0, 0.0, false, true)
    } else if seconds >= last.end_seconds() as f64 {
        let after_end = seconds > last.end_seconds() as f64;
        if after_end {
            log::debug!("{seconds}s follows the itinerary, clamping to its last trip");
        }
        (itinerary.len() - 1, 1.0, false, after_end)
    } else {
        let index = itinerary
            .iter()
            .position(|trip| seconds < trip.end_seconds() as f64)?;
        let trip = itinerary.get(index)?;
        if trip.contains_seconds(seconds) {
            (index, trip.fraction_at(seconds), false, false)
        } else {
            (index, 0.0, true, false)
        }
    };

    let trip = itinerary.get(trip_index)?;
    let position = trip.position_at(leg_fraction)?;
    Some(LocatedPosition {
        trip_index,
        leg_fraction,
        position,
        resolved_seconds: seconds,
        trip_start: trip.start_time,
        trip_end: trip.end_time,
        in_rest,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::locate;
    use crate::itinerary::{calculate_itinerary, Itinerary};
    use crate::tracking::{ClockPosition, SimulationCursor};
    use crate::util::time_ops;
    use serde_json::json;

    /// Ida 10:00-10:55, rest 10 minutes, Vuelta 11:05-12:00
    fn itinerary() -> Itinerary {
        let route = |id: u64, from: &str, to: &str, lng: (f64, f64)| {
            serde_json::from_value(json!({
                "id": id,
                "name": format!("{from}-{to}"),
                "stops": [
                    {"name": from, "lat": 0.0, "lng": lng.0, "time": "00:00"},
                    {"name": to, "lat": 0.0, "lng": lng.1, "time": "00:10"}
                ]
            }))
            .expect("route should parse")
        };
        let line = serde_json::from_value(json!({
            "id": 1, "name": "L", "routeIdaId": 1, "routeVueltaId": 2,
            "startTime": "10:00", "endTime": "12:00", "turns": 1,
            "restIda": 10, "restVuelta": 20
        }))
        .expect("line should parse");
        calculate_itinerary(&line, &route(1, "A", "B", (0.0, 1.0)), &route(2, "B", "A", (1.0, 0.0)))
            .expect("itinerary should compute")
    }

    fn at(time: &str) -> ClockPosition {
        ClockPosition::WallClock(time_ops::parse_clock_time(time).expect("valid time"))
    }

    #[test]
    fn test_time_within_a_trip() {
        let located = locate(&itinerary(), &at("10:27:30")).expect("should locate");
        assert_eq!(located.trip_index, 0);
        assert!((located.leg_fraction - 0.5).abs() < 1e-9);
        assert!((located.position.lng - 0.5).abs() < 1e-9);
        assert!(!located.in_rest);
        assert!(!located.clamped);
        assert!((located.expected().expected_seconds() - located.resolved_seconds).abs() < 1e-9);
    }

    #[test]
    fn test_time_in_rest_selects_next_trip_at_departure() {
        let located = locate(&itinerary(), &at("11:00")).expect("should locate");
        assert_eq!(located.trip_index, 1);
        assert_eq!(located.leg_fraction, 0.0);
        assert!(located.in_rest);
        assert_eq!(located.position.lng, 1.0);
    }

    #[test]
    fn test_trip_end_belongs_to_the_following_rest() {
        let located = locate(&itinerary(), &at("10:55")).expect("should locate");
        assert_eq!(located.trip_index, 1);
        assert!(located.in_rest);
    }

    #[test]
    fn test_times_outside_the_window_are_clamped() {
        let before = locate(&itinerary(), &at("09:00")).expect("should locate");
        assert_eq!((before.trip_index, before.leg_fraction), (0, 0.0));
        assert!(before.clamped);

        let after = locate(&itinerary(), &at("12:30")).expect("should locate");
        assert_eq!((after.trip_index, after.leg_fraction), (1, 1.0));
        assert!(after.clamped);
        assert_eq!(after.position.lng, 0.0);
    }

    #[test]
    fn test_cursor_maps_onto_the_window() {
        let it = itinerary();
        let start = locate(&it, &ClockPosition::Cursor(SimulationCursor::new(0.0)))
            .expect("should locate");
        assert_eq!((start.trip_index, start.leg_fraction), (0, 0.0));

        let middle = locate(&it, &ClockPosition::Cursor(SimulationCursor::new(50.0)))
            .expect("should locate");
        assert_eq!(middle.resolved_seconds, 11.0 * 3600.0);
        assert!(middle.in_rest);

        let end = locate(&it, &ClockPosition::Cursor(SimulationCursor::new(100.0)))
            .expect("should locate");
        assert_eq!((end.trip_index, end.leg_fraction), (1, 1.0));
        assert!(!end.clamped);
    }

    #[test]
    fn test_empty_itinerary_is_unresolved() {
        let empty = Itinerary::default();
        assert!(locate(&empty, &at("10:00")).is_none());
        assert!(locate(&empty, &ClockPosition::Cursor(SimulationCursor::new(10.0))).is_none());
    }
}
