//! Thin client for the Google Sheets API: service-account auth plus
//! range read/write/clear, row append, and sheet management, with typed
//! A1-notation building as the only local logic.

pub mod a1;
pub mod auth;
pub mod client;
pub mod config;
pub mod http_client;
pub mod records;
pub mod value_range_factory;

// Re-export key types for easy access
pub use a1::{A1Notation, CellPosition, CellRange, Column, FromA1Notation, Row, ToA1Notation};
pub use client::{SheetInfo, SpreadsheetClient, SpreadsheetClientError};
pub use config::SpreadsheetConfig;
