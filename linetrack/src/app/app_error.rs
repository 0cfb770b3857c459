use linetrack_core::{itinerary::ItineraryError, store::StoreError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    ItineraryError(#[from] ItineraryError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed writing output: {0}")]
    OutputError(String),
}
