use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use finscore_core::scores::Dataset;

pub const APP_NAME: &str = "Financial Score API";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub sheets_api_key: String,
    pub spreadsheet_id: String,
    pub zscore_sheet: String,
    pub fscore_sheet: String,
    pub sheets_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_or("FINSCORE_LISTEN_ADDR", "0.0.0.0:8000")
            .parse()
            .context("Invalid FINSCORE_LISTEN_ADDR")?;
        let db_path = env_or("FINSCORE_DB_PATH", "./db/financial_scores.db");
        let cors_allow = env_or("FINSCORE_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("FINSCORE_REQUEST_TIMEOUT_MS", "60000")
            .parse()
            .context("Invalid FINSCORE_REQUEST_TIMEOUT_MS")?;
        let sheets_timeout_secs: u64 = env_or("SHEETS_TIMEOUT_SECS", "30")
            .parse()
            .context("Invalid SHEETS_TIMEOUT_SECS")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            sheets_api_key: required("GOOGLE_SHEETS_API_KEY")?,
            spreadsheet_id: required("SPREADSHEET_ID")?,
            zscore_sheet: env_or("ZSCORE_SHEET_NAME", Dataset::ZScore.default_sheet()),
            fscore_sheet: env_or("FSCORE_SHEET_NAME", Dataset::FScore.default_sheet()),
            sheets_timeout: Duration::from_secs(sheets_timeout_secs),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required(key: &str) -> anyhow::Result<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("{} must be set", key))
}
