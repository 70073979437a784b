pub mod cache;
pub mod errors;
pub mod factory;
pub mod kinds;
pub mod map;
pub mod maps;
