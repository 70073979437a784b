pub mod flat;
pub mod log;
pub mod smooth;
