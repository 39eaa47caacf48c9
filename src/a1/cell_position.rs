use error_stack::{report, ResultExt};

use super::column::Column;
use super::notation::{
    split_a1_notation, A1Notation, A1NotationParseError, FromA1Notation, ToA1Notation,
};
use super::row::Row;

/// A single cell, e.g. `B7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl CellPosition {
    pub fn new(col: impl Into<Column>, row: impl Into<Row>) -> Self {
        CellPosition {
            col: col.into(),
            row: row.into(),
        }
    }
}

impl std::ops::Add<Row> for CellPosition {
    type Output = CellPosition;

    fn add(self, rhs: Row) -> Self::Output {
        CellPosition {
            col: self.col,
            row: self.row + rhs,
        }
    }
}

impl std::ops::Add<Column> for CellPosition {
    type Output = CellPosition;

    fn add(self, rhs: Column) -> Self::Output {
        CellPosition {
            col: self.col + rhs,
            row: self.row,
        }
    }
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation::from(format!(
                "'{}'!{}{}",
                sheet_name.trim_matches('\''),
                self.col,
                self.row
            )),
            None => A1Notation::from(format!("{}{}", self.col, self.row)),
        }
    }
}

impl FromA1Notation for CellPosition {
    type Err = A1NotationParseError;

    fn from_a1_notation(a1_notation: &A1Notation) -> error_stack::Result<Self, Self::Err> {
        let parts = split_a1_notation(a1_notation);
        cell_from_reference(&parts.start)
    }
}

/// Parses a bare cell reference (`B7`) into a position.
pub(super) fn cell_from_reference(
    reference: &str,
) -> error_stack::Result<CellPosition, A1NotationParseError> {
    let digits_at = reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| report!(A1NotationParseError::MissingRow))
        .attach_printable_lazy(|| format!("reference: {}", reference))?;

    let (letters, digits) = reference.split_at(digits_at);

    let col = letters
        .parse::<Column>()
        .change_context(A1NotationParseError::InvalidColumn)
        .attach_printable_lazy(|| format!("reference: {}", reference))?;
    let row = digits
        .parse::<Row>()
        .change_context(A1NotationParseError::InvalidRow)
        .attach_printable_lazy(|| format!("reference: {}", reference))?;

    Ok(CellPosition { col, row })
}
