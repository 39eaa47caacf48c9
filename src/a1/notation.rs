use std::fmt::Formatter;

use thiserror::Error;

/// A range or cell reference in A1 notation, e.g. `'My Sheet'!A1:C10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub(crate) String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl From<String> for A1Notation {
    fn from(s: String) -> Self {
        A1Notation(s)
    }
}

impl From<&str> for A1Notation {
    fn from(s: &str) -> Self {
        A1Notation(s.to_owned())
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

pub trait FromA1Notation: Sized {
    type Err;

    fn from_a1_notation(a1_notation: &A1Notation) -> error_stack::Result<Self, Self::Err>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum A1NotationParseError {
    #[error("Error parsing column letters")]
    InvalidColumn,
    #[error("Error parsing row number")]
    InvalidRow,
    #[error("Cell reference has no row number")]
    MissingRow,
}

pub struct A1NotationParts {
    pub sheet_title: Option<String>,
    pub start: String,
    pub end: String,
}

/// Splits `'Sheet'!A1:C10` into its sheet title and endpoint references.
/// Single-cell references yield identical start and end parts.
pub fn split_a1_notation(a1_notation: &A1Notation) -> A1NotationParts {
    let (sheet_title, local) = match a1_notation.0.find('!') {
        Some(index) => {
            let (sheet_title, local) = a1_notation.0.split_at(index);
            (
                Some(sheet_title.trim_matches('\'').to_owned()),
                local.trim_start_matches('!').to_owned(),
            )
        }
        None => (None, a1_notation.0.clone()),
    };

    let (start, end) = match local.find(':') {
        Some(index) => {
            let (start, end) = local.split_at(index);
            (start.to_owned(), end.trim_start_matches(':').to_owned())
        }
        None => (local.clone(), local),
    };

    A1NotationParts {
        sheet_title,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_range() {
        let parts = split_a1_notation(&A1Notation::from("'My Sheet'!A1:C10"));
        assert_eq!(parts.sheet_title.as_deref(), Some("My Sheet"));
        assert_eq!(parts.start, "A1");
        assert_eq!(parts.end, "C10");
    }

    #[test]
    fn test_split_no_sheet() {
        let parts = split_a1_notation(&A1Notation::from("B2:D4"));
        assert_eq!(parts.sheet_title, None);
        assert_eq!(parts.start, "B2");
        assert_eq!(parts.end, "D4");
    }

    #[test]
    fn test_split_single_cell() {
        let parts = split_a1_notation(&A1Notation::from("Data!B7"));
        assert_eq!(parts.sheet_title.as_deref(), Some("Data"));
        assert_eq!(parts.start, "B7");
        assert_eq!(parts.end, "B7");
    }
}
