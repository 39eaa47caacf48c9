use super::cell_position::{cell_from_reference, CellPosition};
use super::notation::{
    split_a1_notation, A1Notation, A1NotationParseError, FromA1Notation, ToA1Notation,
};

/// A rectangular block of cells, optionally pinned to a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
    pub sheet_title: Option<String>,
}

impl CellRange {
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        CellRange {
            start,
            end,
            sheet_title: None,
        }
    }

    pub fn with_sheet_title(self, sheet_title: impl Into<String>) -> Self {
        CellRange {
            sheet_title: Some(sheet_title.into()),
            ..self
        }
    }

    pub fn row_count(&self) -> u32 {
        self.end.row.number() - self.start.row.number() + 1
    }

    pub fn column_count(&self) -> u32 {
        self.end.col.number() - self.start.col.number() + 1
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        let sheet_name = sheet_name.or(self.sheet_title.as_deref());
        let start = self.start.to_a1_notation(None);
        let end = self.end.to_a1_notation(None);

        match sheet_name {
            Some(sheet_name) => A1Notation::from(format!(
                "'{}'!{}:{}",
                sheet_name.trim_matches('\''),
                start,
                end
            )),
            None => A1Notation::from(format!("{}:{}", start, end)),
        }
    }
}

impl FromA1Notation for CellRange {
    type Err = A1NotationParseError;

    fn from_a1_notation(a1_notation: &A1Notation) -> error_stack::Result<Self, Self::Err> {
        let parts = split_a1_notation(a1_notation);

        Ok(CellRange {
            start: cell_from_reference(&parts.start)?,
            end: cell_from_reference(&parts.end)?,
            sheet_title: parts.sheet_title,
        })
    }
}
