use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::util::time_ops;

/// how far the vehicle is from its schedule, and where it is headed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviationResult {
    /// actual progress time minus expected schedule time. positive is late, negative is early.
    pub deviation_seconds: i64,
    /// empty when there is nothing to track
    pub next_stop_name: String,
    pub current_trip_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_stop_index: Option<usize>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_clock_time"
    )]
    pub next_stop_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_clock_time"
    )]
    pub expected_time: Option<NaiveTime>,
}

impl DeviationResult {
    /// the "not yet tracking" result: zero deviation and no next stop
    pub fn neutral() -> DeviationResult {
        DeviationResult::default()
    }

    pub fn is_neutral(&self) -> bool {
        self.next_stop_name.is_empty() && self.next_stop_index.is_none()
    }

    pub fn is_late(&self) -> bool {
        self.deviation_seconds > 0
    }

    pub fn is_early(&self) -> bool {
        self.deviation_seconds < 0
    }

    /// deviation as signed `mm:ss`
    pub fn formatted_deviation(&self) -> String {
        time_ops::format_deviation(self.deviation_seconds)
    }
}

mod optional_clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::util::time_ops;

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time_ops::format_hms(time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| time_ops::parse_clock_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
