use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    model::{definition_id, TurnRest},
    util::time_ops,
};

/// a shuttle line: an outbound (Ida) and a return (Vuelta) route operated
/// back and forth `turns` times across a service window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineConfig {
    #[serde(deserialize_with = "definition_id::deserialize_definition_id")]
    pub id: String,
    pub name: String,
    #[serde(
        alias = "routeIda",
        deserialize_with = "definition_id::deserialize_definition_id"
    )]
    pub route_ida_id: String,
    #[serde(
        alias = "routeVuelta",
        deserialize_with = "definition_id::deserialize_definition_id"
    )]
    pub route_vuelta_id: String,
    /// beginning of the service window
    #[serde(
        alias = "start",
        deserialize_with = "time_ops::deserialize_clock_time",
        serialize_with = "time_ops::serialize_clock_time"
    )]
    pub start_time: NaiveTime,
    /// end of the service window, must be after `start_time`
    #[serde(
        alias = "end",
        deserialize_with = "time_ops::deserialize_clock_time",
        serialize_with = "time_ops::serialize_clock_time"
    )]
    pub end_time: NaiveTime,
    /// number of Ida + Vuelta cycles
    pub turns: u32,
    /// minutes of rest after each Ida leg
    #[serde(default)]
    pub rest_ida: u32,
    /// minutes of rest after each Vuelta leg that is followed by another leg
    #[serde(default)]
    pub rest_vuelta: u32,
    /// optional per-turn overrides of the two rest values, indexed by turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rests: Option<Vec<TurnRest>>,
}

impl LineConfig {
    /// rest minutes that apply to the given (0-based) turn
    pub fn turn_rest(&self, turn_index: usize) -> TurnRest {
        self.rests
            .as_ref()
            .and_then(|rests| rests.get(turn_index).copied())
            .unwrap_or(TurnRest {
                ida: self.rest_ida,
                vuelta: self.rest_vuelta,
            })
    }

    /// each turn is one Ida leg and one Vuelta leg
    pub fn leg_count(&self) -> usize {
        self.turns as usize * 2
    }
}
