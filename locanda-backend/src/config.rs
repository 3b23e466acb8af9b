use crate::error::{AppError, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            // Required: connecting lazily with a missing URL would only
            // fail at the first query, so reject it at startup instead.
            database_url: env::var("DATABASE_URL")
                .map_err(|_| AppError::ConfigError("DATABASE_URL is not set".to_string()))?,

            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
        })
    }
}
