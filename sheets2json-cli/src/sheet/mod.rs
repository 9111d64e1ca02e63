//! Sheet rows to ordered JSON records
//!
//! The first row of a range names the fields; every later row becomes one
//! [`Record`] whose keys follow the header's column order.

mod builder;
mod cell;
mod record;

pub use builder::{build_record_set, grid_from_json, header_labels};
pub use cell::CellValue;
pub use record::{Record, RecordSet};

/// Raw rows of cells as returned by a range fetch. Rows may be ragged.
pub type CellGrid = Vec<Vec<CellValue>>;
