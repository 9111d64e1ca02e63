//! A1-notation range resolution from positional arguments

/// Column span read when no explicit range is given
pub const DEFAULT_COLUMNS: &str = "A:ZZ";

/// Worksheet and cell range as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSpec {
    worksheet: Option<String>,
    cells: Option<String>,
}

impl RangeSpec {
    /// Empty strings count as absent
    pub fn new(worksheet: Option<String>, cells: Option<String>) -> Self {
        Self {
            worksheet: worksheet.filter(|w| !w.is_empty()),
            cells: cells.filter(|c| !c.is_empty()),
        }
    }

    /// Render the range sent to the API.
    ///
    /// Without a worksheet the cell range is ignored and the first sheet's
    /// `default_columns` are read.
    pub fn to_a1(&self, default_columns: &str) -> String {
        match (&self.worksheet, &self.cells) {
            (None, _) => default_columns.to_string(),
            (Some(sheet), None) => format!("{}!{}", sheet, default_columns),
            (Some(sheet), Some(cells)) => format!("{}!{}", sheet, cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_worksheet() {
        assert_eq!(RangeSpec::new(None, None).to_a1(DEFAULT_COLUMNS), "A:ZZ");
        assert_eq!(
            RangeSpec::new(None, Some("B2:C".into())).to_a1(DEFAULT_COLUMNS),
            "A:ZZ"
        );
        assert_eq!(
            RangeSpec::new(Some(String::new()), None).to_a1(DEFAULT_COLUMNS),
            "A:ZZ"
        );
    }

    #[test]
    fn test_worksheet_only() {
        assert_eq!(
            RangeSpec::new(Some("Sales".into()), None).to_a1(DEFAULT_COLUMNS),
            "Sales!A:ZZ"
        );
        assert_eq!(
            RangeSpec::new(Some("Sales".into()), Some(String::new())).to_a1("A:F"),
            "Sales!A:F"
        );
    }

    #[test]
    fn test_worksheet_and_range() {
        assert_eq!(
            RangeSpec::new(Some("Sales 2024".into()), Some("A1:D50".into())).to_a1(DEFAULT_COLUMNS),
            "Sales 2024!A1:D50"
        );
    }
}
