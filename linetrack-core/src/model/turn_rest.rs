use serde::{Deserialize, Serialize};

/// rest minutes for a single turn, overriding the line-wide values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnRest {
    /// minutes waited after the Ida leg of this turn
    #[serde(default)]
    pub ida: u32,
    /// minutes waited after the Vuelta leg of this turn
    #[serde(default)]
    pub vuelta: u32,
}
