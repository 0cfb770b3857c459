mod itinerary;
mod itinerary_error;
mod itinerary_ops;
mod rest_schedule;
pub mod stop_offsets;

pub use itinerary::Itinerary;
pub use itinerary_error::ItineraryError;
pub use itinerary_ops::calculate_itinerary;
pub use rest_schedule::RestSchedule;
