// Library interface for RunTools modules
// This allows integration tests and benchmarks to access the core functionality

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod races;
pub mod session;
pub mod time;
pub mod zones;

// Re-export commonly used types for convenience
pub use calculator::Calculator;
pub use error::{InputField, Result, RunToolsError};
pub use export::{ExportError, ExportFormat};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::*;
pub use races::RacePredictor;
pub use time::{seconds_to_pace, seconds_to_time, time_to_seconds, validate_time};
pub use zones::ZoneCalculator;
