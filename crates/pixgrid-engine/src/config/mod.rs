//! Engine configuration.

mod engine;
mod error;

pub use engine::EngineConfig;
pub use error::ConfigError;
