//! Z-Score domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scores::{
    merge_field, ColumnMapping, Dataset, FieldSlot, ScoreEntity, SheetRecord,
};

/// Persisted Z-Score row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZScore {
    pub id: i32,
    pub ticker: String,
    pub year_2024: Option<f64>,
    pub year_2023: Option<f64>,
    pub year_2022: Option<f64>,
    pub year_2021: Option<f64>,
    pub year_2020: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScoreEntity for ZScore {
    fn blank(ticker: &str) -> Self {
        ZScore {
            id: 0,
            ticker: ticker.to_string(),
            year_2024: None,
            year_2023: None,
            year_2022: None,
            year_2021: None,
            year_2020: None,
            updated_at: None,
        }
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }
}

/// A Z-Score row as read from the sheet. `None` means the column was absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZScoreRecord {
    pub ticker: String,
    pub year_2024: Option<Option<f64>>,
    pub year_2023: Option<Option<f64>>,
    pub year_2022: Option<Option<f64>>,
    pub year_2021: Option<Option<f64>>,
    pub year_2020: Option<Option<f64>>,
}

pub static ZSCORE_COLUMNS: [ColumnMapping<ZScoreRecord>; 5] = [
    ColumnMapping {
        header: "2024Y",
        field: "year_2024",
        slot: FieldSlot::Numeric(|r| &mut r.year_2024),
    },
    ColumnMapping {
        header: "2023Y",
        field: "year_2023",
        slot: FieldSlot::Numeric(|r| &mut r.year_2023),
    },
    ColumnMapping {
        header: "2022Y",
        field: "year_2022",
        slot: FieldSlot::Numeric(|r| &mut r.year_2022),
    },
    ColumnMapping {
        header: "2021Y",
        field: "year_2021",
        slot: FieldSlot::Numeric(|r| &mut r.year_2021),
    },
    ColumnMapping {
        header: "2020Y",
        field: "year_2020",
        slot: FieldSlot::Numeric(|r| &mut r.year_2020),
    },
];

impl SheetRecord for ZScoreRecord {
    type Entity = ZScore;

    const DATASET: Dataset = Dataset::ZScore;

    fn columns() -> &'static [ColumnMapping<Self>] {
        &ZSCORE_COLUMNS
    }

    fn with_ticker(ticker: String) -> Self {
        ZScoreRecord {
            ticker,
            ..Default::default()
        }
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn merge_into(&self, entity: &mut ZScore) {
        merge_field(&mut entity.year_2024, &self.year_2024);
        merge_field(&mut entity.year_2023, &self.year_2023);
        merge_field(&mut entity.year_2022, &self.year_2022);
        merge_field(&mut entity.year_2021, &self.year_2021);
        merge_field(&mut entity.year_2020, &self.year_2020);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::normalize_grid;
    use finscore_sheets::SheetGrid;

    #[test]
    fn test_column_table_covers_every_year() {
        let headers: Vec<&str> = ZSCORE_COLUMNS.iter().map(|c| c.header).collect();
        assert_eq!(headers, ["2024Y", "2023Y", "2022Y", "2021Y", "2020Y"]);
        assert!(ZSCORE_COLUMNS
            .iter()
            .all(|c| matches!(c.slot, FieldSlot::Numeric(_))));
    }

    #[test]
    fn test_sheet_row_to_new_entity() {
        let grid = SheetGrid::from_rows([
            vec!["Ticker", "2024Y", "2023Y", "2022Y", "2021Y", "2020Y"],
            vec!["aaa", "3,5", "", "x", "1.2", "-0,25"],
        ]);

        let records: Vec<ZScoreRecord> = normalize_grid(&grid);
        let entity = records[0].to_entity();

        assert_eq!(entity.ticker, "AAA");
        assert_eq!(entity.year_2024, Some(3.5));
        assert_eq!(entity.year_2023, None);
        assert_eq!(entity.year_2022, None);
        assert_eq!(entity.year_2021, Some(1.2));
        assert_eq!(entity.year_2020, Some(-0.25));
        assert_eq!(entity.updated_at, None);
    }

    #[test]
    fn test_merge_keeps_ticker_and_absent_fields() {
        let mut entity = ZScore {
            year_2022: Some(7.0),
            ..ZScore::blank("AAA")
        };
        let record = ZScoreRecord {
            year_2024: Some(Some(1.0)),
            ..ZScoreRecord::with_ticker("AAA".to_string())
        };

        record.merge_into(&mut entity);

        assert_eq!(entity.ticker, "AAA");
        assert_eq!(entity.year_2024, Some(1.0));
        assert_eq!(entity.year_2022, Some(7.0));
    }
}
