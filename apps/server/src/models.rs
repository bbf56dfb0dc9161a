//! Response bodies and their wire naming.

use chrono::{DateTime, Utc};
use finscore_core::fscores::FScore;
use finscore_core::scores::{ReconcileStats, RefreshSummary};
use finscore_core::zscores::ZScore;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ZScoreResponse {
    pub id: i32,
    pub ticker: String,
    #[serde(rename = "2024Y")]
    pub year_2024: Option<f64>,
    #[serde(rename = "2023Y")]
    pub year_2023: Option<f64>,
    #[serde(rename = "2022Y")]
    pub year_2022: Option<f64>,
    #[serde(rename = "2021Y")]
    pub year_2021: Option<f64>,
    #[serde(rename = "2020Y")]
    pub year_2020: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ZScore> for ZScoreResponse {
    fn from(z: ZScore) -> Self {
        Self {
            id: z.id,
            ticker: z.ticker,
            year_2024: z.year_2024,
            year_2023: z.year_2023,
            year_2022: z.year_2022,
            year_2021: z.year_2021,
            year_2020: z.year_2020,
            updated_at: z.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FScoreYears {
    #[serde(rename = "2024")]
    pub score_2024: Option<i32>,
    #[serde(rename = "2023")]
    pub score_2023: Option<i32>,
    #[serde(rename = "2022")]
    pub score_2022: Option<i32>,
    #[serde(rename = "2021")]
    pub score_2021: Option<i32>,
    #[serde(rename = "2020")]
    pub score_2020: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FScoreMetrics {
    pub roa: Option<f64>,
    pub cfo: Option<f64>,
    pub delta_roa: Option<f64>,
    pub cfo_lnst: Option<f64>,
    pub delta_long_term_debt: Option<f64>,
    pub delta_current_ratio: Option<f64>,
    pub shares_issued: Option<f64>,
    pub delta_gross_margin: Option<f64>,
    pub delta_asset_turnover: Option<f64>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FScoreCriteria {
    pub roa_positive: bool,
    pub cfo_positive: bool,
    pub delta_roa_positive: bool,
    pub cfo_greater_than_ni: bool,
    pub delta_debt_negative: bool,
    pub delta_current_ratio_positive: bool,
    pub no_new_shares: bool,
    pub delta_gross_margin_positive: bool,
    pub delta_asset_turnover_positive: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FScoreResponse {
    pub id: i32,
    pub ticker: String,
    pub scores: FScoreYears,
    pub metrics: FScoreMetrics,
    pub criteria: FScoreCriteria,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<FScore> for FScoreResponse {
    fn from(f: FScore) -> Self {
        Self {
            id: f.id,
            ticker: f.ticker,
            scores: FScoreYears {
                score_2024: f.score_2024,
                score_2023: f.score_2023,
                score_2022: f.score_2022,
                score_2021: f.score_2021,
                score_2020: f.score_2020,
            },
            metrics: FScoreMetrics {
                roa: f.roa,
                cfo: f.cfo,
                delta_roa: f.delta_roa,
                cfo_lnst: f.cfo_lnst,
                delta_long_term_debt: f.delta_long_term_debt,
                delta_current_ratio: f.delta_current_ratio,
                shares_issued: f.shares_issued,
                delta_gross_margin: f.delta_gross_margin,
                delta_asset_turnover: f.delta_asset_turnover,
            },
            criteria: FScoreCriteria {
                roa_positive: f.roa_positive,
                cfo_positive: f.cfo_positive,
                delta_roa_positive: f.delta_roa_positive,
                cfo_greater_than_ni: f.cfo_greater_than_ni,
                delta_debt_negative: f.delta_debt_negative,
                delta_current_ratio_positive: f.delta_current_ratio_positive,
                no_new_shares: f.no_new_shares,
                delta_gross_margin_positive: f.delta_gross_margin_positive,
                delta_asset_turnover_positive: f.delta_asset_turnover_positive,
            },
            updated_at: f.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[aliases(
    ZScoreListResponse = ScoreListResponse<ZScoreResponse>,
    FScoreListResponse = ScoreListResponse<FScoreResponse>
)]
pub struct ScoreListResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub total_count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> ScoreListResponse<T> {
    /// Wraps `data`, with `last_updated` the newest modification time.
    pub fn new(
        message: impl Into<String>,
        data: Vec<T>,
        last_updated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            total_count: data.len(),
            data,
            last_updated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RefreshStats {
    pub inserted: usize,
    pub updated: usize,
    pub errors: usize,
}

impl From<ReconcileStats> for RefreshStats {
    fn from(s: ReconcileStats) -> Self {
        Self {
            inserted: s.inserted,
            updated: s.updated,
            errors: s.errors,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub records_processed: usize,
    pub stats: RefreshStats,
    pub timestamp: DateTime<Utc>,
}

impl From<RefreshSummary> for RefreshResponse {
    fn from(summary: RefreshSummary) -> Self {
        Self {
            success: true,
            message: format!("{} data refreshed successfully", summary.dataset.label()),
            records_processed: summary.records_processed,
            stats: summary.stats.into(),
            timestamp: summary.timestamp,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub application: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub timestamp: DateTime<Utc>,
}
