use serde::{Deserialize, Serialize};

use crate::model::{LineConfig, Route};

/// a line together with the two routes it references, everything the
/// itinerary calculator needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineDefinitions {
    pub line: LineConfig,
    pub route_ida: Route,
    pub route_vuelta: Route,
}

impl LineDefinitions {
    pub fn new(line: LineConfig, route_ida: Route, route_vuelta: Route) -> LineDefinitions {
        LineDefinitions {
            line,
            route_ida,
            route_vuelta,
        }
    }
}
