pub mod fs;
pub mod geo_utils;
pub mod time;
