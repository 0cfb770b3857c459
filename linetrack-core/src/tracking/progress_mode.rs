use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// selects the progress source that feeds the deviation tracker.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressMode {
    /// progress follows the clock, the simulation cursor or a reported position
    #[default]
    Auto,
    /// progress is the stop index chosen by the operator
    Manual,
}

impl Display for ProgressMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProgressMode::Auto => "AUTO",
            ProgressMode::Manual => "MANUAL",
        };
        write!(f, "{s}")
    }
}
