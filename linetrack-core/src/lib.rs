pub mod itinerary;
pub mod model;
pub mod store;
pub mod tracking;
pub mod util;
