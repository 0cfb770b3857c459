mod app_config;
mod app_error;
pub mod itinerary;
mod linetrack_cli;
pub mod list;
mod output_format;
pub mod render;
pub mod track;
pub mod watch;

pub use app_config::AppConfig;
pub use app_error::AppError;
pub use linetrack_cli::{LinetrackCliArguments, LinetrackOperation};
pub use output_format::OutputFormat;
