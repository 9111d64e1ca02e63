//! Export Google Sheets ranges as JSON arrays of objects.
//!
//! The first row of the range names the fields. Every later row becomes one
//! JSON object whose keys keep the sheet's column order.

pub mod api;
pub mod cli;
pub mod config;
pub mod output;
pub mod sheet;
