use crate::{
    itinerary::{stop_offsets, Itinerary, ItineraryError, RestSchedule},
    model::{Direction, LineConfig, Route, TimedStop, Trip},
    util::time_ops,
};

/// computes the itinerary of a line: `2 × turns` legs alternating Ida and
/// Vuelta, separated by rests, exactly covering the service window.
///
/// every leg receives an equal share of the driving time (the window minus
/// all rests) regardless of its route's length or stop count. the last leg
/// absorbs the integer division remainder so that it ends exactly at the
/// window end. stops on each leg keep the relative spacing of their route's
/// nominal times, stretched or compressed to the leg's duration.
///
/// # Arguments
///
/// * `config`       - the line, with its service window, turns and rests
/// * `route_ida`    - route traversed by Ida legs
/// * `route_vuelta` - route traversed by Vuelta legs
///
/// # Returns
///
/// * the complete itinerary, or an error. no partial itinerary is ever returned.
pub fn calculate_itinerary(
    config: &LineConfig,
    route_ida: &Route,
    route_vuelta: &Route,
) -> Result<Itinerary, ItineraryError> {
    if config.turns < 1 {
        return Err(ItineraryError::invalid_config(format!(
            "line '{}' must run at least 1 turn",
            config.id
        )));
    }
    let ida_offsets = stop_offsets::stop_offset_fractions(route_ida)?;
    let vuelta_offsets = stop_offsets::stop_offset_fractions(route_vuelta)?;

    let start = time_ops::seconds_from_midnight(&config.start_time);
    let end = time_ops::seconds_from_midnight(&config.end_time);
    if end <= start {
        return Err(ItineraryError::invalid_config(format!(
            "line '{}' ends at {} which is not after its start at {}",
            config.id,
            time_ops::format_hms(&config.end_time),
            time_ops::format_hms(&config.start_time)
        )));
    }

    let window = end - start;
    let legs = config.leg_count();
    // feasibility is settled before anything is allocated per leg
    let rest_total = RestSchedule::total_seconds_of(config);
    let driving = window.saturating_sub(rest_total);
    if driving <= 0 || (legs as i64) > driving {
        return Err(ItineraryError::InfeasibleSchedule {
            window_seconds: window,
            rest_seconds: rest_total,
        });
    }
    let share = driving / legs as i64;
    let rests = RestSchedule::from_config(config);
    log::debug!(
        "line '{}': window={window}s rests={rest_total}s driving={driving}s legs={legs} share={share}s",
        config.id
    );

    let mut trips = Vec::with_capacity(legs);
    let mut leg_start = start;
    for leg in 0..legs {
        let duration = if leg + 1 == legs {
            driving - share * (legs as i64 - 1)
        } else {
            share
        };
        let leg_end = leg_start + duration;
        let direction = Direction::of_leg(leg);
        let (route, offsets) = match direction {
            Direction::Ida => (route_ida, &ida_offsets),
            Direction::Vuelta => (route_vuelta, &vuelta_offsets),
        };
        trips.push(build_trip(leg, direction, leg_start, leg_end, route, offsets)?);
        leg_start = leg_end + rests.rest_after(leg);
    }

    match trips.last() {
        Some(last) if last.end_seconds() == end => Ok(Itinerary::new(trips)),
        _ => Err(ItineraryError::InternalError(format!(
            "itinerary for line '{}' does not end at the service window end",
            config.id
        ))),
    }
}

fn build_trip(
    leg: usize,
    direction: Direction,
    start_seconds: i64,
    end_seconds: i64,
    route: &Route,
    offsets: &[f64],
) -> Result<Trip, ItineraryError> {
    let to_time = |seconds: i64| {
        time_ops::time_from_seconds(seconds).ok_or_else(|| {
            ItineraryError::InternalError(format!("leg {} time {seconds}s is outside of a day", leg + 1))
        })
    };
    let duration = (end_seconds - start_seconds) as f64;
    let stops = route
        .stops
        .iter()
        .zip(offsets.iter())
        .map(|(stop, offset)| TimedStop {
            name: stop.name.clone(),
            coordinate: stop.coordinate(),
            offset_fraction: *offset,
            time: time_ops::time_from_fractional_seconds(start_seconds as f64 + offset * duration),
        })
        .collect();

    Ok(Trip {
        direction,
        leg_index: leg + 1,
        turn_index: leg / 2,
        route: route.clone(),
        start_time: to_time(start_seconds)?,
        end_time: to_time(end_seconds)?,
        stops,
    })
}
