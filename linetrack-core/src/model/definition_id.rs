use serde::{Deserialize, Deserializer};

/// identifiers written by editors may be JSON strings or numbers. both are
/// read into their string form so that `1` and `"1"` refer to the same definition.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefinitionId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
}

impl From<RawDefinitionId> for String {
    fn from(value: RawDefinitionId) -> Self {
        match value {
            RawDefinitionId::Text(s) => s,
            RawDefinitionId::Integer(i) => i.to_string(),
            RawDefinitionId::Unsigned(u) => u.to_string(),
        }
    }
}

pub fn deserialize_definition_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawDefinitionId::deserialize(deserializer).map(String::from)
}
