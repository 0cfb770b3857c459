use serde_json::Value;

use crate::store::StoreError;

/// key/value persistence for route and line definitions. values are JSON
/// documents, interpreting them is left to the store operations.
pub trait DefinitionStore {
    /// the value stored under `key`, None when nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}
