//! F-Score domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scores::{
    merge_field, ColumnMapping, Dataset, FieldSlot, ScoreEntity, SheetRecord,
};

/// Persisted F-Score row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FScore {
    pub id: i32,
    pub ticker: String,
    // Yearly scores, 0 to 9
    pub score_2024: Option<i32>,
    pub score_2023: Option<i32>,
    pub score_2022: Option<i32>,
    pub score_2021: Option<i32>,
    pub score_2020: Option<i32>,
    // Metrics
    pub roa: Option<f64>,
    pub cfo: Option<f64>,
    pub delta_roa: Option<f64>,
    pub cfo_lnst: Option<f64>,
    pub delta_long_term_debt: Option<f64>,
    pub delta_current_ratio: Option<f64>,
    pub shares_issued: Option<f64>,
    pub delta_gross_margin: Option<f64>,
    pub delta_asset_turnover: Option<f64>,
    // Criteria
    pub roa_positive: bool,
    pub cfo_positive: bool,
    pub delta_roa_positive: bool,
    pub cfo_greater_than_ni: bool,
    pub delta_debt_negative: bool,
    pub delta_current_ratio_positive: bool,
    pub no_new_shares: bool,
    pub delta_gross_margin_positive: bool,
    pub delta_asset_turnover_positive: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScoreEntity for FScore {
    fn blank(ticker: &str) -> Self {
        FScore {
            id: 0,
            ticker: ticker.to_string(),
            score_2024: None,
            score_2023: None,
            score_2022: None,
            score_2021: None,
            score_2020: None,
            roa: None,
            cfo: None,
            delta_roa: None,
            cfo_lnst: None,
            delta_long_term_debt: None,
            delta_current_ratio: None,
            shares_issued: None,
            delta_gross_margin: None,
            delta_asset_turnover: None,
            roa_positive: false,
            cfo_positive: false,
            delta_roa_positive: false,
            cfo_greater_than_ni: false,
            delta_debt_negative: false,
            delta_current_ratio_positive: false,
            no_new_shares: false,
            delta_gross_margin_positive: false,
            delta_asset_turnover_positive: false,
            updated_at: None,
        }
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }
}

/// An F-Score row as read from the sheet. `None` means the column was absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FScoreRecord {
    pub ticker: String,
    pub score_2024: Option<Option<i32>>,
    pub score_2023: Option<Option<i32>>,
    pub score_2022: Option<Option<i32>>,
    pub score_2021: Option<Option<i32>>,
    pub score_2020: Option<Option<i32>>,
    pub roa: Option<Option<f64>>,
    pub cfo: Option<Option<f64>>,
    pub delta_roa: Option<Option<f64>>,
    pub cfo_lnst: Option<Option<f64>>,
    pub delta_long_term_debt: Option<Option<f64>>,
    pub delta_current_ratio: Option<Option<f64>>,
    pub shares_issued: Option<Option<f64>>,
    pub delta_gross_margin: Option<Option<f64>>,
    pub delta_asset_turnover: Option<Option<f64>>,
    pub roa_positive: Option<bool>,
    pub cfo_positive: Option<bool>,
    pub delta_roa_positive: Option<bool>,
    pub cfo_greater_than_ni: Option<bool>,
    pub delta_debt_negative: Option<bool>,
    pub delta_current_ratio_positive: Option<bool>,
    pub no_new_shares: Option<bool>,
    pub delta_gross_margin_positive: Option<bool>,
    pub delta_asset_turnover_positive: Option<bool>,
}

pub static FSCORE_COLUMNS: [ColumnMapping<FScoreRecord>; 23] = [
    ColumnMapping {
        header: "2024",
        field: "score_2024",
        slot: FieldSlot::Integer(|r| &mut r.score_2024),
    },
    ColumnMapping {
        header: "2023",
        field: "score_2023",
        slot: FieldSlot::Integer(|r| &mut r.score_2023),
    },
    ColumnMapping {
        header: "2022",
        field: "score_2022",
        slot: FieldSlot::Integer(|r| &mut r.score_2022),
    },
    ColumnMapping {
        header: "2021",
        field: "score_2021",
        slot: FieldSlot::Integer(|r| &mut r.score_2021),
    },
    ColumnMapping {
        header: "2020",
        field: "score_2020",
        slot: FieldSlot::Integer(|r| &mut r.score_2020),
    },
    ColumnMapping {
        header: "ROA",
        field: "roa",
        slot: FieldSlot::Numeric(|r| &mut r.roa),
    },
    ColumnMapping {
        header: "CFO",
        field: "cfo",
        slot: FieldSlot::Numeric(|r| &mut r.cfo),
    },
    ColumnMapping {
        header: "ΔROA",
        field: "delta_roa",
        slot: FieldSlot::Numeric(|r| &mut r.delta_roa),
    },
    ColumnMapping {
        header: "CFO_LNST",
        field: "cfo_lnst",
        slot: FieldSlot::Numeric(|r| &mut r.cfo_lnst),
    },
    ColumnMapping {
        header: "Δno dai han",
        field: "delta_long_term_debt",
        slot: FieldSlot::Numeric(|r| &mut r.delta_long_term_debt),
    },
    ColumnMapping {
        header: "ΔCurrent Ratio",
        field: "delta_current_ratio",
        slot: FieldSlot::Numeric(|r| &mut r.delta_current_ratio),
    },
    ColumnMapping {
        header: "SLCP_PH",
        field: "shares_issued",
        slot: FieldSlot::Numeric(|r| &mut r.shares_issued),
    },
    ColumnMapping {
        header: "ΔGross Margin",
        field: "delta_gross_margin",
        slot: FieldSlot::Numeric(|r| &mut r.delta_gross_margin),
    },
    ColumnMapping {
        header: "ΔAsset Turnover",
        field: "delta_asset_turnover",
        slot: FieldSlot::Numeric(|r| &mut r.delta_asset_turnover),
    },
    ColumnMapping {
        header: "ROA>0",
        field: "roa_positive",
        slot: FieldSlot::Flag(|r| &mut r.roa_positive),
    },
    ColumnMapping {
        header: "CFO>0",
        field: "cfo_positive",
        slot: FieldSlot::Flag(|r| &mut r.cfo_positive),
    },
    ColumnMapping {
        header: "ΔROA>0",
        field: "delta_roa_positive",
        slot: FieldSlot::Flag(|r| &mut r.delta_roa_positive),
    },
    ColumnMapping {
        header: "CFO>LNST",
        field: "cfo_greater_than_ni",
        slot: FieldSlot::Flag(|r| &mut r.cfo_greater_than_ni),
    },
    ColumnMapping {
        header: "ΔNợ dài hạn<0",
        field: "delta_debt_negative",
        slot: FieldSlot::Flag(|r| &mut r.delta_debt_negative),
    },
    ColumnMapping {
        header: "ΔCurrent Ratio>0",
        field: "delta_current_ratio_positive",
        slot: FieldSlot::Flag(|r| &mut r.delta_current_ratio_positive),
    },
    ColumnMapping {
        header: "Không phát hành CP",
        field: "no_new_shares",
        slot: FieldSlot::Flag(|r| &mut r.no_new_shares),
    },
    ColumnMapping {
        header: "ΔGross Margin>0",
        field: "delta_gross_margin_positive",
        slot: FieldSlot::Flag(|r| &mut r.delta_gross_margin_positive),
    },
    ColumnMapping {
        header: "ΔAsset Turnover>0",
        field: "delta_asset_turnover_positive",
        slot: FieldSlot::Flag(|r| &mut r.delta_asset_turnover_positive),
    },
];

impl SheetRecord for FScoreRecord {
    type Entity = FScore;

    const DATASET: Dataset = Dataset::FScore;

    fn columns() -> &'static [ColumnMapping<Self>] {
        &FSCORE_COLUMNS
    }

    fn with_ticker(ticker: String) -> Self {
        FScoreRecord {
            ticker,
            ..Default::default()
        }
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn merge_into(&self, entity: &mut FScore) {
        merge_field(&mut entity.score_2024, &self.score_2024);
        merge_field(&mut entity.score_2023, &self.score_2023);
        merge_field(&mut entity.score_2022, &self.score_2022);
        merge_field(&mut entity.score_2021, &self.score_2021);
        merge_field(&mut entity.score_2020, &self.score_2020);
        merge_field(&mut entity.roa, &self.roa);
        merge_field(&mut entity.cfo, &self.cfo);
        merge_field(&mut entity.delta_roa, &self.delta_roa);
        merge_field(&mut entity.cfo_lnst, &self.cfo_lnst);
        merge_field(&mut entity.delta_long_term_debt, &self.delta_long_term_debt);
        merge_field(&mut entity.delta_current_ratio, &self.delta_current_ratio);
        merge_field(&mut entity.shares_issued, &self.shares_issued);
        merge_field(&mut entity.delta_gross_margin, &self.delta_gross_margin);
        merge_field(&mut entity.delta_asset_turnover, &self.delta_asset_turnover);
        merge_field(&mut entity.roa_positive, &self.roa_positive);
        merge_field(&mut entity.cfo_positive, &self.cfo_positive);
        merge_field(&mut entity.delta_roa_positive, &self.delta_roa_positive);
        merge_field(&mut entity.cfo_greater_than_ni, &self.cfo_greater_than_ni);
        merge_field(&mut entity.delta_debt_negative, &self.delta_debt_negative);
        merge_field(&mut entity.delta_current_ratio_positive, &self.delta_current_ratio_positive);
        merge_field(&mut entity.no_new_shares, &self.no_new_shares);
        merge_field(&mut entity.delta_gross_margin_positive, &self.delta_gross_margin_positive);
        merge_field(&mut entity.delta_asset_turnover_positive, &self.delta_asset_turnover_positive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::{normalize_grid, HeaderIndex};
    use finscore_sheets::SheetGrid;
    use std::collections::HashSet;

    fn header_row() -> Vec<String> {
        std::iter::once("Mã CK")
            .chain(FSCORE_COLUMNS.iter().map(|c| c.header))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_column_table_is_unique() {
        let headers: HashSet<&str> = FSCORE_COLUMNS.iter().map(|c| c.header).collect();
        let fields: HashSet<&str> = FSCORE_COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(headers.len(), FSCORE_COLUMNS.len());
        assert_eq!(fields.len(), FSCORE_COLUMNS.len());
    }

    #[test]
    fn test_every_column_is_bound_from_sheet_header() {
        let index = HeaderIndex::from_header(&header_row());
        for column in FSCORE_COLUMNS.iter() {
            assert!(
                index.position(column.header).is_some(),
                "unbound header {}",
                column.header
            );
        }
    }

    #[test]
    fn test_full_row_normalizes_every_kind() {
        let mut row = vec!["vnm".to_string()];
        row.extend(["7", "6", "", "5.0", "x"].map(str::to_string));
        row.extend(
            ["0,12", "1500", "-0,01", "", "n/a", "0.3", "0", "1,5", "-2"].map(str::to_string),
        );
        row.extend(["1", "TRUE", "0", "true", "", "yes", "1", "False", " 1 "].map(str::to_string));
        let grid = SheetGrid::new(vec![header_row(), row]);

        let records: Vec<FScoreRecord> = normalize_grid(&grid);
        let fscore = records[0].to_entity();

        assert_eq!(fscore.ticker, "VNM");
        assert_eq!(fscore.score_2024, Some(7));
        assert_eq!(fscore.score_2023, Some(6));
        assert_eq!(fscore.score_2022, None);
        assert_eq!(fscore.score_2021, None);
        assert_eq!(fscore.score_2020, None);

        assert_eq!(fscore.roa, Some(0.12));
        assert_eq!(fscore.cfo, Some(1500.0));
        assert_eq!(fscore.delta_roa, Some(-0.01));
        assert_eq!(fscore.cfo_lnst, None);
        assert_eq!(fscore.delta_long_term_debt, None);
        assert_eq!(fscore.delta_current_ratio, Some(0.3));
        assert_eq!(fscore.shares_issued, Some(0.0));
        assert_eq!(fscore.delta_gross_margin, Some(1.5));
        assert_eq!(fscore.delta_asset_turnover, Some(-2.0));

        assert!(fscore.roa_positive);
        assert!(fscore.cfo_positive);
        assert!(!fscore.delta_roa_positive);
        assert!(fscore.cfo_greater_than_ni);
        assert!(!fscore.delta_debt_negative);
        assert!(!fscore.delta_current_ratio_positive);
        assert!(fscore.no_new_shares);
        assert!(!fscore.delta_gross_margin_positive);
        assert!(fscore.delta_asset_turnover_positive);
    }

    #[test]
    fn test_absent_criteria_keep_stored_value() {
        let mut stored = FScore {
            roa_positive: true,
            score_2024: Some(8),
            ..FScore::blank("VNM")
        };
        let record = FScoreRecord {
            cfo_positive: Some(true),
            score_2024: Some(None),
            ..FScoreRecord::with_ticker("VNM".to_string())
        };

        record.merge_into(&mut stored);

        assert!(stored.roa_positive);
        assert!(stored.cfo_positive);
        assert_eq!(stored.score_2024, None);
    }

    #[test]
    fn test_new_entity_defaults_criteria_to_false() {
        let fscore = FScoreRecord::with_ticker("VNM".to_string()).to_entity();
        assert!(!fscore.roa_positive);
        assert!(!fscore.no_new_shares);
        assert_eq!(fscore.roa, None);
    }
}
