use itertools::Itertools;
use linetrack_core::{
    itinerary::Itinerary,
    model::{LineConfig, LineDefinitions, Route},
    tracking::TrackingSnapshot,
    util::time_ops,
};

/// text rendering of an itinerary: each trip with its stops, and the rests between trips.
pub fn itinerary_text(definitions: &LineDefinitions, itinerary: &Itinerary) -> String {
    let line = &definitions.line;
    let header = format!(
        "{} ({}) {} - {}, {} turns, {} trips",
        line.name,
        line.id,
        time_ops::format_hm(&line.start_time),
        time_ops::format_hm(&line.end_time),
        line.turns,
        itinerary.len()
    );
    let trips = itinerary.iter().enumerate().map(|(idx, trip)| {
        let stops = trip
            .stops
            .iter()
            .map(|stop| format!("    {}  {}", time_ops::format_hms(&stop.time), stop.name))
            .join("\n");
        let rest = itinerary
            .rest_after(idx)
            .map(|seconds| format!("\n  rest {}", format_minutes(seconds)))
            .unwrap_or_default();
        format!(
            "  trip {} {} (turn {}) {} - {} on '{}'\n{stops}{rest}",
            trip.leg_index,
            trip.direction,
            trip.turn_index + 1,
            time_ops::format_hms(&trip.start_time),
            time_ops::format_hms(&trip.end_time),
            trip.route.name
        )
    });
    std::iter::once(header).chain(trips).join("\n")
}

/// one line summary of a tracking snapshot
pub fn snapshot_text(snapshot: &TrackingSnapshot) -> String {
    let clock = time_ops::format_hms(&snapshot.clock);
    let Some(located) = snapshot.located else {
        return format!("{clock} {} not tracking", snapshot.mode);
    };
    let deviation = &snapshot.deviation;
    let next_stop = match deviation.next_stop_time {
        Some(time) => format!("{} at {}", deviation.next_stop_name, time_ops::format_hm(&time)),
        None => deviation.next_stop_name.clone(),
    };
    let lateness = if deviation.is_late() {
        " late"
    } else if deviation.is_early() {
        " early"
    } else {
        ""
    };
    let mut parts = vec![
        format!("{clock} {}", snapshot.mode),
        format!("deviation {}{lateness}", snapshot.formatted_deviation),
        format!("next {next_stop}"),
        format!(
            "trip {} {} - {}",
            located.trip_index + 1,
            time_ops::format_hm(&located.trip_start),
            time_ops::format_hm(&located.trip_end)
        ),
    ];
    if located.in_rest {
        parts.push(String::from("resting"));
    }
    if let Some(cursor) = snapshot.cursor {
        parts.push(format!("cursor {:.1}%", cursor.percent()));
    }
    if let Some(position) = snapshot.vehicle_position {
        parts.push(format!("at {:.6},{:.6}", position.lat, position.lng));
    }
    parts.join(" | ")
}

pub fn routes_text(routes: &[Route]) -> String {
    if routes.is_empty() {
        return String::from("no routes stored");
    }
    routes
        .iter()
        .map(|route| {
            format!(
                "{}  {}  {} stops  {:.2} km",
                route.id,
                route.name,
                route.stops.len(),
                route.length_km()
            )
        })
        .join("\n")
}

pub fn lines_text(lines: &[LineConfig]) -> String {
    if lines.is_empty() {
        return String::from("no lines stored");
    }
    lines
        .iter()
        .map(|line| {
            format!(
                "{}  {}  ida={} vuelta={}  {} - {}  {} turns  rests {}/{} min",
                line.id,
                line.name,
                line.route_ida_id,
                line.route_vuelta_id,
                time_ops::format_hm(&line.start_time),
                time_ops::format_hm(&line.end_time),
                line.turns,
                line.rest_ida,
                line.rest_vuelta
            )
        })
        .join("\n")
}

fn format_minutes(seconds: i64) -> String {
    if seconds % 60 == 0 {
        format!("{} min", seconds / 60)
    } else {
        format!("{}s", seconds)
    }
}
