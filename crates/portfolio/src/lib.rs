pub mod config;
pub mod error;
pub mod profile;
pub mod render;
pub mod telemetry;
