pub mod colour_mapping;
pub mod escape_time;
