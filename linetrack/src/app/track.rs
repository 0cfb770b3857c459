use chrono::NaiveTime;
use linetrack_core::{
    model::Coordinate,
    store::{store_ops, JsonFileStore},
    tracking::{ProgressMode, TrackingEvent, TrackingSession, TrackingSnapshot},
};

use crate::app::{render, AppConfig, AppError};

/// inputs of a single tracking snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackOptions {
    /// clock time, the local time when absent
    pub at: Option<NaiveTime>,
    pub cursor: Option<f64>,
    pub manual_stop: Option<usize>,
    pub position: Option<Coordinate>,
}

/// tracks a stored line once and prints the snapshot.
pub fn run(config: &AppConfig, line_id: &str, options: &TrackOptions) -> Result<(), AppError> {
    let store = JsonFileStore::new(config.store_path());
    let definitions = store_ops::find_line_definitions(&store, line_id)?;
    let clock = options
        .at
        .unwrap_or_else(|| chrono::Local::now().time());
    let mut session = TrackingSession::new(definitions, clock)?;
    let snapshot = track(&mut session, options)?;
    let output = config
        .output_format
        .render(&snapshot, render::snapshot_text)?;
    println!("{output}");
    Ok(())
}

/// feeds the options to a session as events, returning the last snapshot
pub fn track(
    session: &mut TrackingSession,
    options: &TrackOptions,
) -> Result<TrackingSnapshot, AppError> {
    let mut snapshot = session.snapshot();
    if let Some(percent) = options.cursor {
        snapshot = session.handle(TrackingEvent::CursorMoved(percent))?;
    }
    if options.position.is_some() {
        snapshot = session.handle(TrackingEvent::PositionReported(options.position))?;
    }
    if let Some(stop_index) = options.manual_stop {
        session.handle(TrackingEvent::ModeSwitched(ProgressMode::Manual))?;
        snapshot = session.handle(TrackingEvent::ManualStopSelected(stop_index))?;
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::{track, TrackOptions};
    use linetrack_core::{
        model::LineDefinitions, tracking::ProgressMode, tracking::TrackingSession,
        util::time_ops,
    };
    use serde_json::json;

    fn session(clock: &str) -> TrackingSession {
        let definitions: LineDefinitions = serde_json::from_value(json!({
            "line": {
                "id": "L", "name": "Line", "routeIdaId": "a", "routeVueltaId": "b",
                "startTime": "10:00", "endTime": "10:40", "turns": 1
            },
            "routeIda": {
                "id": "a", "name": "A-C",
                "stops": [
                    {"name": "A", "lat": 0.0, "lng": 0.0, "time": "08:00"},
                    {"name": "B", "lat": 0.0, "lng": 1.0, "time": "08:10"},
                    {"name": "C", "lat": 0.0, "lng": 2.0, "time": "08:20"}
                ]
            },
            "routeVuelta": {
                "id": "b", "name": "C-A",
                "stops": [
                    {"name": "C", "lat": 0.0, "lng": 2.0, "time": "09:00"},
                    {"name": "A", "lat": 0.0, "lng": 0.0, "time": "09:20"}
                ]
            }
        }))
        .expect("definitions should parse");
        let clock = time_ops::parse_clock_time(clock).expect("valid time");
        TrackingSession::new(definitions, clock).expect("session")
    }

    #[test]
    fn test_default_options_follow_the_clock() {
        let mut s = session("10:05");
        let snapshot = track(&mut s, &TrackOptions::default()).expect("track");
        assert_eq!(snapshot.mode, ProgressMode::Auto);
        assert_eq!(snapshot.deviation.deviation_seconds, 0);
        assert_eq!(snapshot.deviation.next_stop_name, "B");
    }

    #[test]
    fn test_manual_stop_switches_mode() {
        let mut s = session("10:05");
        let options = TrackOptions {
            manual_stop: Some(1),
            ..TrackOptions::default()
        };
        let snapshot = track(&mut s, &options).expect("track");
        assert_eq!(snapshot.mode, ProgressMode::Manual);
        assert_eq!(snapshot.manual_stop_index, 1);
        assert_eq!(snapshot.deviation.deviation_seconds, 300);
        assert_eq!(snapshot.deviation.next_stop_name, "C");
    }

    #[test]
    fn test_cursor_option() {
        let mut s = session("10:05");
        let options = TrackOptions {
            cursor: Some(50.0),
            ..TrackOptions::default()
        };
        let snapshot = track(&mut s, &options).expect("track");
        // 50% of 10:00-10:40 is 10:20
        assert_eq!(snapshot.deviation.deviation_seconds, 900);
    }
}
