use serde::{Deserialize, Serialize};

use crate::{
    model::{definition_id, Stop},
    util::geo_utils,
};

/// an ordered sequence of stops owned by the route editor. a route is
/// treated as immutable once a line refers to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    #[serde(deserialize_with = "definition_id::deserialize_definition_id")]
    pub id: String,
    pub name: String,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn first_stop(&self) -> Option<&Stop> {
        self.stops.first()
    }

    pub fn last_stop(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// haversine length of the route in kilometers, following each stop's traced path.
    pub fn length_km(&self) -> f64 {
        geo_utils::route_length_meters(&self.stops) / 1000.0
    }
}
