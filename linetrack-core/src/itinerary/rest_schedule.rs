use crate::model::{Direction, LineConfig};

/// rest durations inserted between consecutive legs of an itinerary.
///
/// the rest after leg `j` (0-based) is the Ida rest of its turn when leg `j`
/// is an Ida leg, otherwise the Vuelta rest of its turn. no rest follows the
/// final leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestSchedule {
    /// rest in seconds after each leg except the last
    rests: Vec<i64>,
}

impl RestSchedule {
    pub fn from_config(config: &LineConfig) -> RestSchedule {
        let legs = config.leg_count();
        let rests = (0..legs.saturating_sub(1))
            .map(|leg| {
                let turn_rest = config.turn_rest(leg / 2);
                let minutes = match Direction::of_leg(leg) {
                    Direction::Ida => turn_rest.ida,
                    Direction::Vuelta => turn_rest.vuelta,
                };
                minutes as i64 * 60
            })
            .collect();
        RestSchedule { rests }
    }

    /// total rest in seconds a line inserts, without building its schedule.
    ///
    /// `turns` is unbounded in stored definitions, so this stays constant in
    /// memory and saturates instead of overflowing.
    pub fn total_seconds_of(config: &LineConfig) -> i64 {
        let turns = config.turns as i64;
        if turns == 0 {
            return 0;
        }
        let overrides = config.rests.as_deref().unwrap_or(&[]);
        let overridden = (overrides.len() as i64).min(turns);
        let overridden_minutes: i64 = overrides
            .iter()
            .take(overridden as usize)
            .enumerate()
            .map(|(turn, rest)| {
                // the last turn's Vuelta leg ends the itinerary
                let vuelta = if (turn as i64) < turns - 1 { rest.vuelta as i64 } else { 0 };
                rest.ida as i64 + vuelta
            })
            .sum();
        let remaining = turns - overridden;
        let remaining_vuelta = (remaining - 1).max(0);
        let default_minutes = remaining
            .saturating_mul(config.rest_ida as i64)
            .saturating_add(remaining_vuelta.saturating_mul(config.rest_vuelta as i64));
        overridden_minutes
            .saturating_add(default_minutes)
            .saturating_mul(60)
    }

    /// rest in seconds following the 0-based leg, zero after the last leg
    pub fn rest_after(&self, leg: usize) -> i64 {
        self.rests.get(leg).copied().unwrap_or(0)
    }

    pub fn total_seconds(&self) -> i64 {
        self.rests.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.rests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rests.is_empty()
    }
}
