//! Google Sheets values API.
//!
//! Reads a whole sheet with
//! `GET {base}/{spreadsheetId}/values/{sheet}?key={apiKey}`. Cells come back as
//! formatted strings, which is what the normalizer expects.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::SheetsError;
use crate::models::{SheetGrid, ValueRange};
use crate::provider::GridSource;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SOURCE_ID: &str = "GOOGLE_SHEETS";

/// Connection settings for [`GoogleSheetsClient`].
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub api_key: String,
    pub spreadsheet_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(api_key: impl Into<String>, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            spreadsheet_id: spreadsheet_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

pub struct GoogleSheetsClient {
    client: Client,
    config: SheetsConfig,
}

impl GoogleSheetsClient {
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SheetsError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn values_url(&self, sheet_name: &str) -> String {
        format!(
            "{}/{}/values/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.spreadsheet_id),
            urlencoding::encode(sheet_name)
        )
    }

    async fn fetch_body(&self, sheet_name: &str) -> Result<String, SheetsError> {
        let url = self.values_url(sheet_name);
        debug!("Sheets request: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SheetsError::Timeout {
                        sheet: sheet_name.to_string(),
                    }
                } else {
                    SheetsError::Network {
                        sheet: sheet_name.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::HttpStatus {
                sheet: sheet_name.to_string(),
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                SheetsError::Timeout {
                    sheet: sheet_name.to_string(),
                }
            } else {
                SheetsError::InvalidResponse {
                    sheet: sheet_name.to_string(),
                    message: format!("Failed to read response: {}", e),
                }
            }
        })
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            return message;
        }
    }
    match status {
        StatusCode::TOO_MANY_REQUESTS => "Rate limited".to_string(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            "Invalid or missing API key".to_string()
        }
        _ if body.is_empty() => status.to_string(),
        _ => body.to_string(),
    }
}

#[async_trait]
impl GridSource for GoogleSheetsClient {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_grid(&self, sheet_name: &str) -> Result<SheetGrid, SheetsError> {
        let body = self.fetch_body(sheet_name).await.inspect_err(|e| {
            warn!("Failed to fetch sheet '{}': {}", sheet_name, e);
        })?;

        let parsed: ValueRange =
            serde_json::from_str(&body).map_err(|e| SheetsError::InvalidResponse {
                sheet: sheet_name.to_string(),
                message: e.to_string(),
            })?;

        let grid = SheetGrid::from(parsed);
        debug!("Sheet '{}' returned {} rows", sheet_name, grid.rows.len());
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleSheetsClient {
        GoogleSheetsClient::new(SheetsConfig::new("test_key", "sheet-id")).unwrap()
    }

    #[test]
    fn test_source_id() {
        assert_eq!(client().id(), "GOOGLE_SHEETS");
    }

    #[test]
    fn test_values_url_encodes_sheet_name() {
        let url = client().values_url("F Score");
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/F%20Score"
        );
    }

    #[test]
    fn test_values_url_ignores_trailing_slash() {
        let config = SheetsConfig::new("k", "abc").with_base_url("http://127.0.0.1:9000/");
        let client = GoogleSheetsClient::new(config).unwrap();
        assert_eq!(client.values_url("Zscore"), "http://127.0.0.1:9000/abc/values/Zscore");
    }

    #[test]
    fn test_error_message_prefers_api_envelope() {
        let body = r#"{"error": {"code": 400, "message": "Unable to parse range: Nope"}}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "Unable to parse range: Nope"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, "<html>"),
            "Invalid or missing API key"
        );
        assert_eq!(error_message(StatusCode::TOO_MANY_REQUESTS, ""), "Rate limited");
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, ""),
            "502 Bad Gateway"
        );
    }
}
