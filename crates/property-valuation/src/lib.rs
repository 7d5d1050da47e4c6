pub mod config;
pub mod error;
pub mod evaluation;
pub mod formatting;
pub mod telemetry;
