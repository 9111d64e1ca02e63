//! Sheets API v4 request and response models

use serde::Deserialize;

use crate::sheet::{CellGrid, grid_from_json};

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// Range actually returned, in A1 notation (e.g. "Sheet1!A1:ZZ1000")
    pub range: Option<String>,
    pub major_dimension: Option<String>,
    /// Absent when the range holds no data
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn into_grid(self) -> CellGrid {
        grid_from_json(&self.values)
    }
}

/// Google API error envelope: `{"error": {"code", "message", "status"}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}

/// How the API renders cell values (`valueRenderOption`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueRenderOption {
    /// Values as displayed in the UI, always strings
    #[default]
    Formatted,
    /// Typed values: numbers and booleans stay unquoted
    Unformatted,
    /// Formulas instead of computed values
    Formula,
}

impl ValueRenderOption {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ValueRenderOption::Formatted => "FORMATTED_VALUE",
            ValueRenderOption::Unformatted => "UNFORMATTED_VALUE",
            ValueRenderOption::Formula => "FORMULA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    #[test]
    fn test_parse_value_range() {
        let body = r#"{
            "range": "Sheet1!A1:C3",
            "majorDimension": "ROWS",
            "values": [["Name", "Age"], ["Alice", 30, true]]
        }"#;

        let value_range: ValueRange = serde_json::from_str(body).unwrap();
        assert_eq!(value_range.range.as_deref(), Some("Sheet1!A1:C3"));
        assert_eq!(value_range.major_dimension.as_deref(), Some("ROWS"));

        let grid = value_range.into_grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[1][1], CellValue::from(30i64));
        assert_eq!(grid[1][2], CellValue::Bool(true));
    }

    #[test]
    fn test_missing_values_is_empty_grid() {
        let body = r#"{"range": "Sheet1!A1:ZZ1000", "majorDimension": "ROWS"}"#;
        let value_range: ValueRange = serde_json::from_str(body).unwrap();
        assert!(value_range.into_grid().is_empty());
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND"
            }
        }"#;

        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, Some(404));
        assert_eq!(parsed.error.message, "Requested entity was not found.");
        assert_eq!(parsed.error.status.as_deref(), Some("NOT_FOUND"));
    }

    #[test]
    fn test_render_option_query_values() {
        assert_eq!(ValueRenderOption::default().as_query_value(), "FORMATTED_VALUE");
        assert_eq!(ValueRenderOption::Unformatted.as_query_value(), "UNFORMATTED_VALUE");
        assert_eq!(ValueRenderOption::Formula.as_query_value(), "FORMULA");
    }
}
