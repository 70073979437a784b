//! Configuration boundary.
//!
//! A flat key-value [`store::ConfigStore`] is read once at the start of each
//! render session and resolved into typed [`settings::RenderSettings`].
//! Malformed values never abort a render: they fall back to safe defaults
//! and are reported as [`errors::ConfigError`] warnings.

pub mod errors;
pub mod settings;
pub mod store;
