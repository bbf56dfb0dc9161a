//! Database models for Z-Scores.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finscore_core::zscores::ZScore;

/// Database model for Z-Scores
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::zscores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ZScoreDB {
    pub id: i32,
    pub ticker: String,
    pub year_2024: Option<f64>,
    pub year_2023: Option<f64>,
    pub year_2022: Option<f64>,
    pub year_2021: Option<f64>,
    pub year_2020: Option<f64>,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a Z-Score
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::zscores)]
pub struct NewZScoreDB {
    pub ticker: String,
    pub year_2024: Option<f64>,
    pub year_2023: Option<f64>,
    pub year_2022: Option<f64>,
    pub year_2021: Option<f64>,
    pub year_2020: Option<f64>,
    pub updated_at: NaiveDateTime,
}

impl ZScoreDB {
    pub fn from_entity(entity: &ZScore, updated_at: NaiveDateTime) -> Self {
        ZScoreDB {
            id: entity.id,
            ticker: entity.ticker.clone(),
            year_2024: entity.year_2024,
            year_2023: entity.year_2023,
            year_2022: entity.year_2022,
            year_2021: entity.year_2021,
            year_2020: entity.year_2020,
            updated_at,
        }
    }
}

impl NewZScoreDB {
    pub fn from_entity(entity: &ZScore, updated_at: NaiveDateTime) -> Self {
        NewZScoreDB {
            ticker: entity.ticker.clone(),
            year_2024: entity.year_2024,
            year_2023: entity.year_2023,
            year_2022: entity.year_2022,
            year_2021: entity.year_2021,
            year_2020: entity.year_2020,
            updated_at,
        }
    }
}

impl From<ZScoreDB> for ZScore {
    fn from(db: ZScoreDB) -> Self {
        ZScore {
            id: db.id,
            ticker: db.ticker,
            year_2024: db.year_2024,
            year_2023: db.year_2023,
            year_2022: db.year_2022,
            year_2021: db.year_2021,
            year_2020: db.year_2020,
            updated_at: Some(db.updated_at.and_utc()),
        }
    }
}
