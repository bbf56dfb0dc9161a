//! Database models for F-Scores.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finscore_core::fscores::FScore;

/// Database model for F-Scores
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fscores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct FScoreDB {
    pub id: i32,
    pub ticker: String,
    pub score_2024: Option<i32>,
    pub score_2023: Option<i32>,
    pub score_2022: Option<i32>,
    pub score_2021: Option<i32>,
    pub score_2020: Option<i32>,
    pub roa: Option<f64>,
    pub cfo: Option<f64>,
    pub delta_roa: Option<f64>,
    pub cfo_lnst: Option<f64>,
    pub delta_long_term_debt: Option<f64>,
    pub delta_current_ratio: Option<f64>,
    pub shares_issued: Option<f64>,
    pub delta_gross_margin: Option<f64>,
    pub delta_asset_turnover: Option<f64>,
    pub roa_positive: bool,
    pub cfo_positive: bool,
    pub delta_roa_positive: bool,
    pub cfo_greater_than_ni: bool,
    pub delta_debt_negative: bool,
    pub delta_current_ratio_positive: bool,
    pub no_new_shares: bool,
    pub delta_gross_margin_positive: bool,
    pub delta_asset_turnover_positive: bool,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting an F-Score
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::fscores)]
pub struct NewFScoreDB {
    pub ticker: String,
    pub score_2024: Option<i32>,
    pub score_2023: Option<i32>,
    pub score_2022: Option<i32>,
    pub score_2021: Option<i32>,
    pub score_2020: Option<i32>,
    pub roa: Option<f64>,
    pub cfo: Option<f64>,
    pub delta_roa: Option<f64>,
    pub cfo_lnst: Option<f64>,
    pub delta_long_term_debt: Option<f64>,
    pub delta_current_ratio: Option<f64>,
    pub shares_issued: Option<f64>,
    pub delta_gross_margin: Option<f64>,
    pub delta_asset_turnover: Option<f64>,
    pub roa_positive: bool,
    pub cfo_positive: bool,
    pub delta_roa_positive: bool,
    pub cfo_greater_than_ni: bool,
    pub delta_debt_negative: bool,
    pub delta_current_ratio_positive: bool,
    pub no_new_shares: bool,
    pub delta_gross_margin_positive: bool,
    pub delta_asset_turnover_positive: bool,
    pub updated_at: NaiveDateTime,
}

impl FScoreDB {
    pub fn from_entity(entity: &FScore, updated_at: NaiveDateTime) -> Self {
        FScoreDB {
            id: entity.id,
            ticker: entity.ticker.clone(),
            score_2024: entity.score_2024,
            score_2023: entity.score_2023,
            score_2022: entity.score_2022,
            score_2021: entity.score_2021,
            score_2020: entity.score_2020,
            roa: entity.roa,
            cfo: entity.cfo,
            delta_roa: entity.delta_roa,
            cfo_lnst: entity.cfo_lnst,
            delta_long_term_debt: entity.delta_long_term_debt,
            delta_current_ratio: entity.delta_current_ratio,
            shares_issued: entity.shares_issued,
            delta_gross_margin: entity.delta_gross_margin,
            delta_asset_turnover: entity.delta_asset_turnover,
            roa_positive: entity.roa_positive,
            cfo_positive: entity.cfo_positive,
            delta_roa_positive: entity.delta_roa_positive,
            cfo_greater_than_ni: entity.cfo_greater_than_ni,
            delta_debt_negative: entity.delta_debt_negative,
            delta_current_ratio_positive: entity.delta_current_ratio_positive,
            no_new_shares: entity.no_new_shares,
            delta_gross_margin_positive: entity.delta_gross_margin_positive,
            delta_asset_turnover_positive: entity.delta_asset_turnover_positive,
            updated_at,
        }
    }
}

impl NewFScoreDB {
    pub fn from_entity(entity: &FScore, updated_at: NaiveDateTime) -> Self {
        NewFScoreDB {
            ticker: entity.ticker.clone(),
            score_2024: entity.score_2024,
            score_2023: entity.score_2023,
            score_2022: entity.score_2022,
            score_2021: entity.score_2021,
            score_2020: entity.score_2020,
            roa: entity.roa,
            cfo: entity.cfo,
            delta_roa: entity.delta_roa,
            cfo_lnst: entity.cfo_lnst,
            delta_long_term_debt: entity.delta_long_term_debt,
            delta_current_ratio: entity.delta_current_ratio,
            shares_issued: entity.shares_issued,
            delta_gross_margin: entity.delta_gross_margin,
            delta_asset_turnover: entity.delta_asset_turnover,
            roa_positive: entity.roa_positive,
            cfo_positive: entity.cfo_positive,
            delta_roa_positive: entity.delta_roa_positive,
            cfo_greater_than_ni: entity.cfo_greater_than_ni,
            delta_debt_negative: entity.delta_debt_negative,
            delta_current_ratio_positive: entity.delta_current_ratio_positive,
            no_new_shares: entity.no_new_shares,
            delta_gross_margin_positive: entity.delta_gross_margin_positive,
            delta_asset_turnover_positive: entity.delta_asset_turnover_positive,
            updated_at,
        }
    }
}

impl From<FScoreDB> for FScore {
    fn from(db: FScoreDB) -> Self {
        FScore {
            id: db.id,
            ticker: db.ticker,
            score_2024: db.score_2024,
            score_2023: db.score_2023,
            score_2022: db.score_2022,
            score_2021: db.score_2021,
            score_2020: db.score_2020,
            roa: db.roa,
            cfo: db.cfo,
            delta_roa: db.delta_roa,
            cfo_lnst: db.cfo_lnst,
            delta_long_term_debt: db.delta_long_term_debt,
            delta_current_ratio: db.delta_current_ratio,
            shares_issued: db.shares_issued,
            delta_gross_margin: db.delta_gross_margin,
            delta_asset_turnover: db.delta_asset_turnover,
            roa_positive: db.roa_positive,
            cfo_positive: db.cfo_positive,
            delta_roa_positive: db.delta_roa_positive,
            cfo_greater_than_ni: db.cfo_greater_than_ni,
            delta_debt_negative: db.delta_debt_negative,
            delta_current_ratio_positive: db.delta_current_ratio_positive,
            no_new_shares: db.no_new_shares,
            delta_gross_margin_positive: db.delta_gross_margin_positive,
            delta_asset_turnover_positive: db.delta_asset_turnover_positive,
            updated_at: Some(db.updated_at.and_utc()),
        }
    }
}
