use std::env;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: env::var("FITLOG_API_URL")
                .map_err(|_| AppError::Config("FITLOG_API_URL is not set".to_string()))?,
            timeout_secs: env::var("FITLOG_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
