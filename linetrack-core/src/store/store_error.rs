#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("value stored under '{key}' is malformed: {source}")]
    MalformedValue {
        key: String,
        source: serde_json::Error,
    },
    #[error("line '{0}' not found")]
    MissingLine(String),
    #[error("line '{line_id}' references route '{route_id}' which is not stored")]
    MissingRoute { line_id: String, route_id: String },
    #[error("{0}")]
    InternalError(String),
}
