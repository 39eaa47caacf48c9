//! Typed A1-notation building blocks. Columns and rows are 1-based, like the
//! spreadsheet UI.

pub mod cell_position;
pub mod cell_range;
pub mod column;
pub mod notation;
pub mod row;

pub use cell_position::CellPosition;
pub use cell_range::CellRange;
pub use column::Column;
pub use notation::{A1Notation, A1NotationParseError, FromA1Notation, ToA1Notation};
pub use row::Row;
