use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_DATABASE: &str = "job_tracker_db";

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl CompanyConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix
        let common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(CompanyConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some(DEFAULT_MONGODB_URI), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some(DEFAULT_DATABASE), is_prod)?,
            },
        })
    }
}

/// Reads `key` from the environment. Dev falls back to `default`; prod
/// treats a missing variable as a configuration error.
fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    if let Ok(val) = env::var(key) {
        return Ok(val);
    }

    match default {
        Some(def) if !is_prod => Ok(def.to_string()),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(format!(
            "{} is required in production but not set",
            key
        )))),
    }
}
