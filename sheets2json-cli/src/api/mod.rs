//! Google Sheets API v4 access
//!
//! Authentication, range resolution and the `values.get` client used to pull
//! a cell grid out of a spreadsheet.

pub mod auth;
pub mod client;
pub mod models;
pub mod range;
pub mod resilience;

pub use auth::{ServiceAccountAuth, StaticToken, TokenProvider};
pub use client::{DEFAULT_API_BASE, SheetsClient};
pub use models::ValueRenderOption;
pub use range::{DEFAULT_COLUMNS, RangeSpec};
pub use resilience::RetryConfig;
