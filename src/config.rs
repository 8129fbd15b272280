//! Environment-driven runtime settings.

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Runtime settings for the server binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Interface the HTTP listener binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the HTTP listener binds to.
    #[serde(
        default = "default_port",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub port: u16,
    /// `PostgreSQL` connection string.
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

impl Settings {
    /// Loads settings from `TASKSTORE_`-prefixed environment variables.
    ///
    /// `TASKSTORE_DATABASE_URL` is required; `TASKSTORE_HOST` and
    /// `TASKSTORE_PORT` fall back to `0.0.0.0:8000`.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] when a required variable is
    /// missing or fails to parse.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("TASKSTORE"))
            .build()?
            .try_deserialize()
    }
}
