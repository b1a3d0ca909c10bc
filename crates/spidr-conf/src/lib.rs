//! Configuration for the Spidr interest form
//!
//! Settings are assembled from layered sources, merged in priority order
//! (environment variables > TOML file > defaults):
//!
//! ```
//! use spidr_conf::{EnvSource, Settings, SettingsBuilder, TomlFileSource};
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("SPIDR_LOGGING__LEVEL".to_string(), "debug".to_string())]);
//!
//! let settings: Settings = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("does-not-exist.toml"))
//!     .add_source(EnvSource::new().with_prefix("SPIDR_").with_vars(env))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.logging.level, "debug");
//! assert_eq!(settings.title, "Spidr Air Fryer Interest Form");
//! ```

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::SettingsBuilder;
pub use settings::{LoggingSettings, Settings, SettingsError};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};

/// Prefix of environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "SPIDR_";
