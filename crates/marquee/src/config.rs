//! Application configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! - Bundled defaults (include_str! from marquee.toml)
//! - ~/.config/marquee/marquee.toml
//! - ./marquee.toml
//! - `MARQUEE_*` environment variables (e.g. `MARQUEE_STORAGE_DIR`)

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use marquee_error::{ConfigError, MarqueeError, MarqueeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Filter used when neither `RUST_LOG` nor `log_filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings for the marquee binary.
///
/// # Example
///
/// ```toml
/// storage_dir = "/var/lib/marquee"
/// fixtures = "movies.json"
/// log_filter = "marquee=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Getters)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Directory holding persisted preferences
    storage_dir: Option<PathBuf>,
    /// JSON movie catalog replacing the bundled fixtures
    fixtures: Option<PathBuf>,
    /// Tracing filter directive
    log_filter: Option<String>,
}

impl MarqueeConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a present config file cannot be parsed.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        debug!("Loading configuration");

        const DEFAULT_CONFIG: &str = include_str!("../../../marquee.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/marquee/marquee.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("marquee").required(false))
            .add_source(Environment::with_prefix("MARQUEE"));

        builder
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        debug!(path = %path.as_ref().display(), "Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Directory for persisted preferences.
    ///
    /// Falls back to the platform data directory, then `./.marquee`.
    pub fn storage_path(&self) -> PathBuf {
        match &self.storage_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .map(|dir| dir.join("marquee"))
                .unwrap_or_else(|| PathBuf::from(".marquee")),
        }
    }

    /// Tracing filter to use when `RUST_LOG` is unset.
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
