pub mod geo_utils;
pub mod time_ops;
