use std::fmt::Formatter;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// 1-based spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row(u32);

impl Row {
    pub fn new(number: u32) -> Self {
        assert!(number != 0, "row numbers are 1-based");
        Row(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl std::ops::Add for Row {
    type Output = Row;

    fn add(self, rhs: Row) -> Self::Output {
        Row(self
            .0
            .checked_add(rhs.0)
            .expect("attempt to add with overflow"))
    }
}

impl std::ops::Sub for Row {
    type Output = Row;

    fn sub(self, rhs: Row) -> Self::Output {
        Row::new(
            self.0
                .checked_sub(rhs.0)
                .expect("attempt to subtract with overflow"),
        )
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Row {
    fn from(number: u32) -> Self {
        Row::new(number)
    }
}

impl From<Row> for u32 {
    fn from(row: Row) -> Self {
        row.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowParseError {
    #[error("Row number is not an integer")]
    NotANumber(#[from] ParseIntError),
    #[error("Row numbers are 1-based")]
    Zero,
}

impl FromStr for Row {
    type Err = RowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s.parse()?;
        if number == 0 {
            return Err(RowParseError::Zero);
        }
        Ok(Row(number))
    }
}
