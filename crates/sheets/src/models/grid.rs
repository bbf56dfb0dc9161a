use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw body of a spreadsheet values request.
///
/// `values` is omitted by the API when the requested range is empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: Option<String>,
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// A header row followed by data rows, every cell rendered as a string.
///
/// Rows may be shorter than the header; the API drops trailing empty cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub range: Option<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { range: None, rows }
    }

    /// Builds a grid from string slices. Handy for fixtures.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<ValueRange> for SheetGrid {
    fn from(body: ValueRange) -> Self {
        Self {
            range: body.range,
            rows: body
                .values
                .into_iter()
                .map(|row| row.into_iter().map(cell_to_string).collect())
                .collect(),
        }
    }
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_values_document() {
        let body = r#"{
            "range": "Zscore!A1:F3",
            "majorDimension": "ROWS",
            "values": [
                ["Ticker", "2024Y", "2023Y"],
                ["AAA", "3,5", "2,1"],
                ["BBB", "1,0"]
            ]
        }"#;
        let parsed: ValueRange = serde_json::from_str(body).unwrap();
        let grid = SheetGrid::from(parsed);

        assert_eq!(grid.range.as_deref(), Some("Zscore!A1:F3"));
        assert_eq!(
            grid.header().unwrap(),
            &["Ticker".to_string(), "2024Y".to_string(), "2023Y".to_string()]
        );
        assert_eq!(grid.data_rows().len(), 2);
        assert_eq!(grid.data_rows()[1], vec!["BBB", "1,0"]);
    }

    #[test]
    fn test_missing_values_gives_empty_grid() {
        let parsed: ValueRange =
            serde_json::from_str(r#"{"range": "FScore!A1:Z1000", "majorDimension": "ROWS"}"#)
                .unwrap();
        let grid = SheetGrid::from(parsed);
        assert!(grid.is_empty());
        assert!(grid.header().is_none());
        assert!(grid.data_rows().is_empty());
    }

    #[test]
    fn test_non_string_cells_are_stringified() {
        let parsed: ValueRange =
            serde_json::from_str(r#"{"values": [["Ticker", "ROA>0"], ["AAA", true], ["BBB", 1.5], ["CCC", null]]}"#)
                .unwrap();
        let grid = SheetGrid::from(parsed);
        assert_eq!(grid.data_rows()[0][1], "TRUE");
        assert_eq!(grid.data_rows()[1][1], "1.5");
        assert_eq!(grid.data_rows()[2][1], "");
    }

    #[test]
    fn test_header_only_grid_has_no_data_rows() {
        let grid = SheetGrid::from_rows([vec!["Ticker", "2024Y"]]);
        assert!(grid.header().is_some());
        assert!(grid.data_rows().is_empty());
    }
}
