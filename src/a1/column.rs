use std::fmt::Formatter;
use std::str::FromStr;

use thiserror::Error;

/// 1-based spreadsheet column, displayed as letters (1 -> A, 26 -> Z, 27 -> AA).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn new(number: u32) -> Self {
        assert!(number != 0, "column numbers are 1-based");
        Column(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn letters(&self) -> String {
        column_letters(self.0)
    }
}

impl std::ops::Add for Column {
    type Output = Column;

    fn add(self, rhs: Column) -> Self::Output {
        Column(
            self.0
                .checked_add(rhs.0)
                .expect("attempt to add with overflow"),
        )
    }
}

impl std::ops::Sub for Column {
    type Output = Column;

    fn sub(self, rhs: Column) -> Self::Output {
        Column::new(
            self.0
                .checked_sub(rhs.0)
                .expect("attempt to subtract with overflow"),
        )
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters())
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Show both the numeric and letter representation
        write!(f, "Column(number: {}, letters: {})", self.0, self)
    }
}

impl From<u32> for Column {
    fn from(number: u32) -> Self {
        Column::new(number)
    }
}

impl From<Column> for u32 {
    fn from(col: Column) -> Self {
        col.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnParseError {
    #[error("Column letters are empty")]
    Empty,
    #[error("Non-alphabetic character in column letters")]
    NonAlphabeticCharacter,
}

impl FromStr for Column {
    type Err = ColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ColumnParseError::Empty);
        }
        if s.chars().any(|c| !c.is_ascii_alphabetic()) {
            return Err(ColumnParseError::NonAlphabeticCharacter);
        }

        let number = s
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .fold(0, |acc, c| acc * 26 + (c as u32 - 'A' as u32 + 1));

        Ok(Column(number))
    }
}

fn column_letters(mut number: u32) -> String {
    assert!(number != 0, "column numbers are 1-based");

    let mut letters = Vec::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        letters.push((remainder as u8 + b'A') as char);
        number = (number - remainder) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_single() {
        assert_eq!(Column::new(1).to_string(), "A");
        assert_eq!(Column::new(26).to_string(), "Z");
    }

    #[test]
    fn test_letters_double() {
        assert_eq!(Column::new(27).to_string(), "AA");
        assert_eq!(Column::new(28).to_string(), "AB");
        assert_eq!(Column::new(52).to_string(), "AZ");
        assert_eq!(Column::new(53).to_string(), "BA");
        assert_eq!(Column::new(26 * 26 + 26).to_string(), "ZZ");
    }

    #[test]
    fn test_letters_triple() {
        assert_eq!(Column::new(26 * 26 + 27).to_string(), "AAA");
    }

    #[test]
    fn test_parse_roundtrip() {
        for number in [1u32, 2, 25, 26, 27, 52, 53, 702, 703, 18278] {
            let col = Column::new(number);
            let parsed: Column = col.letters().parse().unwrap();
            assert_eq!(parsed, col);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: Column = "ab".parse().unwrap();
        let upper: Column = "AB".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.number(), 28);
    }

    #[test]
    fn test_parse_rejects_digits() {
        let result: Result<Column, _> = "A1".parse();
        assert_eq!(result, Err(ColumnParseError::NonAlphabeticCharacter));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result: Result<Column, _> = "".parse();
        assert_eq!(result, Err(ColumnParseError::Empty));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Column::new(5) + Column::new(3), Column::new(8));
        assert_eq!(Column::new(5) - Column::new(3), Column::new(2));
    }

    #[test]
    #[should_panic(expected = "column numbers are 1-based")]
    fn test_zero_is_rejected() {
        let _ = Column::new(0);
    }

    #[test]
    #[should_panic(expected = "column numbers are 1-based")]
    fn test_sub_cannot_reach_zero() {
        let _ = Column::new(5) - Column::new(5);
    }
}
