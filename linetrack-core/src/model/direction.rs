use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// direction of a leg. legs alternate starting with Ida.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// outbound
    Ida,
    /// return
    Vuelta,
}

impl Direction {
    /// direction of the leg at a 0-based position in an itinerary
    pub fn of_leg(leg_index: usize) -> Direction {
        if leg_index % 2 == 0 {
            Direction::Ida
        } else {
            Direction::Vuelta
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ida => write!(f, "Ida"),
            Direction::Vuelta => write!(f, "Vuelta"),
        }
    }
}
