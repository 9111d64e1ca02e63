//! Turn a raw cell grid into header-keyed records

use std::collections::HashMap;

use super::{CellGrid, CellValue, Record, RecordSet};

/// Stringify a header row, one label per cell
pub fn header_labels(row: &[CellValue]) -> Vec<String> {
    row.iter().map(|cell| cell.to_string()).collect()
}

/// Resolve labels to the source column feeding each output field.
///
/// A repeated label keeps the slot of its first occurrence but reads from its
/// last column, so later columns overwrite earlier ones.
fn field_layout(labels: Vec<String>) -> Vec<(String, usize)> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(labels.len());
    let mut layout: Vec<(String, usize)> = Vec::with_capacity(labels.len());

    for (column, label) in labels.into_iter().enumerate() {
        match slots.get(&label) {
            Some(&slot) => layout[slot].1 = column,
            None => {
                slots.insert(label.clone(), layout.len());
                layout.push((label, column));
            }
        }
    }

    layout
}

/// Build one record per data row, using row 0 as the header.
///
/// Cells missing from short rows become `""`; cells beyond the header width are
/// ignored. Data cells keep their original type. Never fails.
pub fn build_record_set(grid: &[Vec<CellValue>]) -> RecordSet {
    let Some((header, rows)) = grid.split_first() else {
        return RecordSet::new();
    };

    let layout = field_layout(header_labels(header));

    rows.iter()
        .map(|row| {
            let mut record = Record::with_capacity(layout.len());
            for (label, column) in &layout {
                let value = row
                    .get(*column)
                    .cloned()
                    .unwrap_or_else(|| CellValue::String(String::new()));
                record.push(label.clone(), value);
            }
            record
        })
        .collect()
}

/// Convert the API's raw `values` array into a cell grid
pub fn grid_from_json(values: &[Vec<serde_json::Value>]) -> CellGrid {
    values
        .iter()
        .map(|row| row.iter().map(CellValue::from_json).collect())
        .collect()
}
