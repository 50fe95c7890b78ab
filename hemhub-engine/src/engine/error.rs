use thiserror::Error;

use hemhub_config::ConfigError;
use hemhub_core::HubError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Session error: {0}")]
    Hub(#[from] HubError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario parsing error: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("Scenario validation failed!\nExpected: {expected}\nActual: {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
