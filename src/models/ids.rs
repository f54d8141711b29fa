//! Strongly-typed expense identifier
//!
//! IDs are issued by the store from a monotonically increasing counter and
//! are never reused, even after the expense they named is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first ID a fresh store issues
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw ID value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The ID issued after this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_next() {
        assert_eq!(ExpenseId::FIRST.value(), 1);
        assert_eq!(ExpenseId::FIRST.next(), ExpenseId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpenseId::new(42).to_string(), "42");
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 12 ".parse::<ExpenseId>().unwrap(), ExpenseId::new(12));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(ExpenseId::new(1) < ExpenseId::new(2));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&ExpenseId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
