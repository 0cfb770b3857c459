mod coordinate;
pub mod definition_id;
mod direction;
mod line_config;
mod line_definitions;
mod route;
mod stop;
mod timed_stop;
mod trip;
mod turn_rest;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use line_config::LineConfig;
pub use line_definitions::LineDefinitions;
pub use route::Route;
pub use stop::Stop;
pub use timed_stop::TimedStop;
pub use trip::Trip;
pub use turn_rest::TurnRest;
