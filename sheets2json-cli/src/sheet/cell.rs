//! Spreadsheet cell value representation

use serde::{Serialize, Serializer};
use serde_json::Number;

/// A single scalar cell as returned by the Sheets API
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent cell (JSON null)
    #[default]
    Empty,
    /// Text cell
    String(String),
    /// Numeric cell, integer or decimal as received
    Number(Number),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    /// Parse from a JSON value in a `values` array
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => CellValue::Number(n.clone()),
            serde_json::Value::String(s) => CellValue::String(s.clone()),
            // The API never nests values; keep the raw text rather than drop it
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                CellValue::String(json.to_string())
            }
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_unit(),
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Textual form used for header labels.
///
/// Numbers are read as `f64` and written with the shortest digits that round
/// trip. Decimal exponents in `-4..6` print plainly (`2024`, `2.5`, `0.0001`);
/// anything outside uses exponent form with a signed two-digit minimum exponent
/// (`1e+06`, `1e-07`, `1.8446744073709552e+19`).
impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", format_number(n)),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn format_number(n: &Number) -> String {
    let value = n.as_f64().unwrap_or_default();

    // `{:e}` gives the shortest mantissa, e.g. "1.5e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Number(i.into())
    }
}

impl From<f64> for CellValue {
    /// Non-finite floats have no JSON form and become `Empty`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map(CellValue::Number).unwrap_or_default()
    }
}
