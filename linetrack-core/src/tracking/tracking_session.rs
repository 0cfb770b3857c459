use chrono::NaiveTime;

use crate::{
    itinerary::{calculate_itinerary, Itinerary, ItineraryError},
    model::{Coordinate, LineDefinitions},
    tracking::{
        compute_deviation, locate, ActualProgress, ClockPosition, LocatedPosition, ManualOverride,
        ProgressMode, SimulationCursor, TrackingEvent, TrackingSnapshot,
    },
};

/// tracks one line against its schedule.
///
/// the session holds the line definitions and the itinerary computed from
/// them. the itinerary is recomputed only when the definitions change, every
/// other event reuses it. each event triggers one synchronous pass of
/// position mapping and deviation tracking and yields a fresh snapshot.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    definitions: LineDefinitions,
    itinerary: Itinerary,
    clock: NaiveTime,
    mode: ProgressMode,
    manual: ManualOverride,
    cursor: Option<SimulationCursor>,
    reported_position: Option<Coordinate>,
}

impl TrackingSession {
    /// starts a session in AUTO mode following the clock.
    ///
    /// # Arguments
    ///
    /// * `definitions` - the line and its two routes
    /// * `clock`       - the initial wall-clock time
    ///
    /// # Returns
    ///
    /// * the session, or the reason the line has no itinerary
    pub fn new(
        definitions: LineDefinitions,
        clock: NaiveTime,
    ) -> Result<TrackingSession, ItineraryError> {
        let itinerary = calculate_itinerary(
            &definitions.line,
            &definitions.route_ida,
            &definitions.route_vuelta,
        )?;
        log::info!(
            "tracking line '{}' with {} trips",
            definitions.line.name,
            itinerary.len()
        );
        Ok(TrackingSession {
            definitions,
            itinerary,
            clock,
            mode: ProgressMode::default(),
            manual: ManualOverride::default(),
            cursor: None,
            reported_position: None,
        })
    }

    pub fn definitions(&self) -> &LineDefinitions {
        &self.definitions
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn clock(&self) -> NaiveTime {
        self.clock
    }

    pub fn mode(&self) -> ProgressMode {
        self.mode
    }

    pub fn manual_override(&self) -> ManualOverride {
        self.manual
    }

    pub fn cursor(&self) -> Option<SimulationCursor> {
        self.cursor
    }

    /// applies an event and recomputes.
    ///
    /// # Returns
    ///
    /// * the new snapshot. changed definitions that do not yield an itinerary
    ///   are rejected with the calculator's error and the session keeps its
    ///   previous definitions and itinerary.
    pub fn handle(&mut self, event: TrackingEvent) -> Result<TrackingSnapshot, ItineraryError> {
        match event {
            TrackingEvent::Tick(time) => self.clock = time,
            TrackingEvent::CursorMoved(percent) => {
                self.cursor = Some(SimulationCursor::new(percent))
            }
            TrackingEvent::CursorCleared => self.cursor = None,
            TrackingEvent::PositionReported(position) => self.reported_position = position,
            TrackingEvent::ManualStep(direction) => match self.mode {
                ProgressMode::Manual => {
                    let stop_count = self.active_stop_count();
                    self.manual.step(direction, stop_count);
                }
                ProgressMode::Auto => {
                    log::debug!("ignoring manual {direction:?} step while in AUTO mode")
                }
            },
            TrackingEvent::ManualStopSelected(stop_index) => match self.mode {
                ProgressMode::Manual => {
                    self.manual = ManualOverride::new(stop_index);
                    self.manual.clamp(self.active_stop_count());
                }
                ProgressMode::Auto => {
                    log::debug!("ignoring manual selection of stop {stop_index} while in AUTO mode")
                }
            },
            TrackingEvent::ModeSwitched(mode) => self.mode = mode,
            TrackingEvent::DefinitionsChanged(definitions) => {
                self.update_definitions(definitions)?
            }
        }
        Ok(self.snapshot())
    }

    /// recomputes the snapshot for the current state without an event
    pub fn snapshot(&mut self) -> TrackingSnapshot {
        let located = self.locate_expected();
        self.manual.clamp(self.active_stop_count());

        let actual = self.actual_progress();
        let expected = located.map(|l| l.expected());
        let deviation = compute_deviation(&self.itinerary, expected.as_ref(), &actual);

        // AUTO keeps the manual index on the last passed stop so that a
        // switch to MANUAL starts where the vehicle is
        if self.mode == ProgressMode::Auto {
            if let Some(next) = deviation.next_stop_index {
                self.manual = ManualOverride::new(next.saturating_sub(1));
            }
        }

        let vehicle_position = self.vehicle_position(located.as_ref(), &actual);
        TrackingSnapshot {
            clock: self.clock,
            mode: self.mode,
            cursor: self.cursor,
            manual_stop_index: self.manual.stop_index,
            located,
            formatted_deviation: deviation.formatted_deviation(),
            deviation,
            vehicle_position,
        }
    }

    fn update_definitions(&mut self, definitions: LineDefinitions) -> Result<(), ItineraryError> {
        if definitions == self.definitions {
            log::debug!(
                "definitions of line '{}' unchanged, keeping itinerary",
                definitions.line.name
            );
            return Ok(());
        }
        let itinerary = calculate_itinerary(
            &definitions.line,
            &definitions.route_ida,
            &definitions.route_vuelta,
        )
        .inspect_err(|e| {
            log::warn!(
                "rejecting definitions of line '{}': {e}",
                definitions.line.name
            )
        })?;
        log::info!(
            "line '{}' changed, recomputed {} trips",
            definitions.line.name,
            itinerary.len()
        );
        self.definitions = definitions;
        self.itinerary = itinerary;
        Ok(())
    }

    fn locate_expected(&self) -> Option<LocatedPosition> {
        locate(&self.itinerary, &ClockPosition::WallClock(self.clock))
    }

    fn active_stop_count(&self) -> usize {
        self.locate_expected()
            .and_then(|l| self.itinerary.get(l.trip_index))
            .map(|trip| trip.stops.len())
            .unwrap_or(0)
    }

    fn actual_progress(&self) -> ActualProgress {
        match (self.mode, self.reported_position, self.cursor) {
            (ProgressMode::Manual, _, _) => ActualProgress::ManualStop(self.manual.stop_index),
            (ProgressMode::Auto, Some(position), _) => ActualProgress::Position(position),
            (ProgressMode::Auto, None, Some(cursor)) => ActualProgress::Cursor(cursor),
            (ProgressMode::Auto, None, None) => ActualProgress::Clock(self.clock),
        }
    }

    fn vehicle_position(
        &self,
        located: Option<&LocatedPosition>,
        actual: &ActualProgress,
    ) -> Option<Coordinate> {
        match actual {
            ActualProgress::Position(position) => Some(*position),
            ActualProgress::Cursor(cursor) => {
                locate(&self.itinerary, &ClockPosition::Cursor(*cursor)).map(|l| l.position)
            }
            ActualProgress::Clock(_) | ActualProgress::ManualStop(_) => {
                let trip = self.itinerary.get(located?.trip_index)?;
                let progress = actual.resolve(&self.itinerary, trip)?;
                trip.position_at(progress.fraction)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrackingSession;
    use crate::model::{Coordinate, LineDefinitions};
    use crate::tracking::{ProgressMode, StepDirection, TrackingEvent};
    use crate::util::time_ops;
    use chrono::NaiveTime;
    use serde_json::json;

    /// Ida A B C over 10:00-10:20 (B at 10:10), Vuelta C A over 10:20-10:40
    fn definitions() -> LineDefinitions {
        serde_json::from_value(json!({
            "line": {
                "id": "L", "name": "Line", "routeIdaId": "ida", "routeVueltaId": "vuelta",
                "startTime": "10:00", "endTime": "10:40", "turns": 1
            },
            "routeIda": {
                "id": "ida", "name": "A-C",
                "stops": [
                    {"name": "A", "lat": 0.0, "lng": 0.0, "time": "08:00"},
                    {"name": "B", "lat": 0.0, "lng": 1.0, "time": "08:10"},
                    {"name": "C", "lat": 0.0, "lng": 3.0, "time": "08:20"}
                ]
            },
            "routeVuelta": {
                "id": "vuelta", "name": "C-A",
                "stops": [
                    {"name": "C", "lat": 0.0, "lng": 3.0, "time": "09:00"},
                    {"name": "A", "lat": 0.0, "lng": 0.0, "time": "09:20"}
                ]
            }
        }))
        .expect("definitions should parse")
    }

    fn time(value: &str) -> NaiveTime {
        time_ops::parse_clock_time(value).expect("valid time")
    }

    fn session(clock: &str) -> TrackingSession {
        TrackingSession::new(definitions(), time(clock)).expect("session should start")
    }

    #[test]
    fn test_auto_mode_follows_the_clock() {
        let mut s = session("10:00");
        let snapshot = s.handle(TrackingEvent::Tick(time("10:05"))).expect("tick");
        assert_eq!(snapshot.deviation.deviation_seconds, 0);
        assert_eq!(snapshot.deviation.next_stop_name, "B");
        assert_eq!(snapshot.formatted_deviation, "+00:00");
        assert_eq!(snapshot.active_trip_window(), Some((time("10:00"), time("10:20"))));
        let position = snapshot.vehicle_position.expect("vehicle position");
        assert!((position.lng - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_manual_override_leaves_itinerary_untouched() {
        let mut s = session("10:05");
        let before = s.itinerary().clone();

        let auto = s.snapshot();
        assert_eq!(auto.manual_stop_index, 0);

        let switched = s
            .handle(TrackingEvent::ModeSwitched(ProgressMode::Manual))
            .expect("switch");
        assert_eq!(switched.deviation.next_stop_name, auto.deviation.next_stop_name);
        assert_eq!(switched.deviation.deviation_seconds, -300);

        let stepped = s
            .handle(TrackingEvent::ManualStep(StepDirection::Forward))
            .expect("step");
        assert_eq!(stepped.deviation.next_stop_name, "C");
        assert_eq!(stepped.deviation.deviation_seconds, 300);
        assert_eq!(stepped.manual_stop_index, 1);

        assert_eq!(s.itinerary(), &before);
    }

    #[test]
    fn test_manual_stop_selection_is_clamped() {
        let mut s = session("10:05");
        s.handle(TrackingEvent::ModeSwitched(ProgressMode::Manual))
            .expect("switch");
        let snapshot = s
            .handle(TrackingEvent::ManualStopSelected(9))
            .expect("select");
        assert_eq!(snapshot.manual_stop_index, 2);
        assert_eq!(snapshot.deviation.next_stop_name, "C");
        assert_eq!(snapshot.deviation.deviation_seconds, 900);
    }

    #[test]
    fn test_manual_steps_are_ignored_in_auto_mode() {
        let mut s = session("10:05");
        let snapshot = s
            .handle(TrackingEvent::ManualStep(StepDirection::Forward))
            .expect("step");
        assert_eq!(snapshot.manual_stop_index, 0);
        assert_eq!(snapshot.deviation.deviation_seconds, 0);
    }

    #[test]
    fn test_cursor_drives_actual_progress() {
        let mut s = session("10:10");
        let on_time = s.handle(TrackingEvent::CursorMoved(25.0)).expect("cursor");
        assert_eq!(on_time.deviation.deviation_seconds, 0);

        let ahead = s.handle(TrackingEvent::CursorMoved(30.0)).expect("cursor");
        assert_eq!(ahead.deviation.deviation_seconds, 120);

        let cleared = s.handle(TrackingEvent::CursorCleared).expect("clear");
        assert_eq!(cleared.deviation.deviation_seconds, 0);
        assert!(cleared.cursor.is_none());
    }

    #[test]
    fn test_reported_position_drives_actual_progress() {
        let mut s = session("10:10");
        let snapshot = s
            .handle(TrackingEvent::PositionReported(Some(Coordinate::new(0.0, 2.0))))
            .expect("position");
        assert_eq!(snapshot.deviation.deviation_seconds, 300);
        assert_eq!(snapshot.deviation.next_stop_name, "C");
        assert_eq!(snapshot.vehicle_position, Some(Coordinate::new(0.0, 2.0)));
    }

    #[test]
    fn test_itinerary_is_recomputed_only_for_new_definitions() {
        let mut s = session("10:05");
        let before = s.itinerary().clone();
        s.handle(TrackingEvent::DefinitionsChanged(definitions()))
            .expect("same definitions");
        assert_eq!(s.itinerary(), &before);

        let mut longer = definitions();
        longer.line.end_time = time("11:00");
        s.handle(TrackingEvent::DefinitionsChanged(longer))
            .expect("new definitions");
        assert_eq!(s.itinerary().window_end(), Some(time("11:00")));
    }

    #[test]
    fn test_invalid_definitions_keep_previous_state() {
        let mut s = session("10:05");
        let before = s.itinerary().clone();
        let mut broken = definitions();
        broken.line.turns = 0;
        assert!(s.handle(TrackingEvent::DefinitionsChanged(broken)).is_err());
        assert_eq!(s.itinerary(), &before);
        assert_eq!(s.definitions(), &definitions());
    }

    #[test]
    fn test_invalid_definitions_cannot_start_a_session() {
        let mut broken = definitions();
        broken.line.end_time = time("09:00");
        assert!(TrackingSession::new(broken, time("10:00")).is_err());
    }
}
