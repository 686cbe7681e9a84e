use crate::error::AppError;
use ::config::{Config as Cfg, Environment, File};
use serde::Deserialize;

/// Settings shared by every service: listener and telemetry.
///
/// Sources, lowest precedence first: an optional `configuration.*` file in the
/// working directory, then `APP__*` environment variables (a `.env` file is
/// loaded into the environment beforehand).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::with_prefix("APP").separator("__"))
    }

    fn from_environment(env: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
