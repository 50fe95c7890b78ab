//! # hemhub Configuration System
//!
//! Hierarchical configuration for the dashboard session.
//!
//! ## Features
//! - **Unified Configuration**: single source of truth across all crates
//! - **Validation**: field ranges plus cross-field checks at load time
//! - **Environment Awareness**: per-environment overrides and `HEMHUB_*`
//!   variables layered over the base file

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod commands;
mod core;
mod devices;
mod error;
mod notifications;
mod sensors;
mod telemetry;
mod validation;

pub use commands::CommandsConfig;
pub use commands::InFlightPolicy;
pub use core::CoreConfig;
pub use core::EventBusConfig;
pub use devices::DeviceSeed;
pub use devices::DevicesConfig;
pub use error::ConfigError;
pub use notifications::NotificationsConfig;
pub use sensors::SensorsConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all hemhub components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct HemhubConfig {
    /// Core system configuration (event bus sizing).
    #[validate(nested)]
    pub core: CoreConfig,

    /// Devices registered at session start.
    #[validate(nested)]
    pub devices: DevicesConfig,

    /// Sensor feed cadence and bounds.
    #[validate(nested)]
    pub sensors: SensorsConfig,

    /// Command pipeline latencies and policy.
    #[validate(nested)]
    pub commands: CommandsConfig,

    /// Notification lifecycle parameters.
    #[validate(nested)]
    pub notifications: NotificationsConfig,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl HemhubConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/hemhub.yaml` - base settings. If missing, defaults are
    ///    used.
    /// 3. `config/<environment>.yaml` - environment-specific overrides,
    ///    selected by `HEMHUB_ENV`.
    /// 4. `HEMHUB_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(HemhubConfig::default()));

        if Path::new("config/hemhub.yaml").exists() {
            figment = figment.merge(Yaml::file("config/hemhub.yaml"));
        }

        let env = std::env::var("HEMHUB_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("HEMHUB_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(HemhubConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("HEMHUB_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    fn validated(config: Self) -> Result<Self, ConfigError> {
        config.validate()?;
        config
            .sensors
            .check_bounds()
            .map_err(ConfigError::Constraint)?;
        Ok(config)
    }
}
