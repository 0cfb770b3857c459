#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ItineraryError {
    #[error("invalid line configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("rests of {rest_seconds}s leave no driving time in a service window of {window_seconds}s")]
    InfeasibleSchedule {
        window_seconds: i64,
        rest_seconds: i64,
    },
    #[error("{0}")]
    InternalError(String),
}

impl ItineraryError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ItineraryError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
