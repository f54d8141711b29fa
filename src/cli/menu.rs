//! Menu choices and lenient input parsing
//!
//! Menu selections must be one of the listed numbers. Numeric field input
//! (amounts and IDs) is parsed permissively: anything unparseable becomes
//! zero instead of an error.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseId;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse a menu selection line
    pub fn parse(line: &str) -> ExpenseResult<Self> {
        match parse_number(line) {
            Some(1) => Ok(Self::Add),
            Some(2) => Ok(Self::View),
            Some(3) => Ok(Self::Update),
            Some(4) => Ok(Self::Delete),
            Some(5) => Ok(Self::Exit),
            _ => Err(ExpenseError::InvalidSelection(format!(
                "menu choice '{}'",
                line.trim()
            ))),
        }
    }

    /// Number shown next to the entry
    pub fn number(&self) -> u8 {
        match self {
            Self::Add => 1,
            Self::View => 2,
            Self::Update => 3,
            Self::Delete => 4,
            Self::Exit => 5,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Expense",
            Self::View => "View Expenses",
            Self::Update => "Update Expense",
            Self::Delete => "Delete Expense",
            Self::Exit => "Exit",
        }
    }
}

/// Which fields the update sub-menu should change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Title,
    Amount,
    Both,
}

impl UpdateField {
    /// All entries in display order
    pub const ALL: [UpdateField; 3] = [UpdateField::Title, UpdateField::Amount, UpdateField::Both];

    /// Parse a sub-menu selection line
    pub fn parse(line: &str) -> ExpenseResult<Self> {
        match parse_number(line) {
            Some(1) => Ok(Self::Title),
            Some(2) => Ok(Self::Amount),
            Some(3) => Ok(Self::Both),
            _ => Err(ExpenseError::InvalidSelection(format!(
                "update field '{}'",
                line.trim()
            ))),
        }
    }

    /// Number shown next to the entry
    pub fn number(&self) -> u8 {
        match self {
            Self::Title => 1,
            Self::Amount => 2,
            Self::Both => 3,
        }
    }

    /// Sub-menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Both => "Both",
        }
    }

    pub fn includes_title(&self) -> bool {
        matches!(self, Self::Title | Self::Both)
    }

    pub fn includes_amount(&self) -> bool {
        matches!(self, Self::Amount | Self::Both)
    }
}

/// Parse an amount, falling back to zero
pub fn parse_amount(line: &str) -> f64 {
    line.trim().parse().unwrap_or(0.0)
}

/// Parse an expense ID, falling back to zero (never issued)
pub fn parse_id(line: &str) -> ExpenseId {
    line.parse().unwrap_or(ExpenseId::new(0))
}

fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Add);
        assert_eq!(MenuChoice::parse(" 2\n").unwrap(), MenuChoice::View);
        assert_eq!(MenuChoice::parse("+3").unwrap(), MenuChoice::Update);
        assert_eq!(MenuChoice::parse("04").unwrap(), MenuChoice::Delete);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_rejects_others() {
        for input in ["0", "6", "-1", "abc", "", "1.0"] {
            let err = MenuChoice::parse(input).unwrap_err();
            assert!(err.is_invalid_selection(), "input {:?}", input);
        }
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()).unwrap(), choice);
        }
    }

    #[test]
    fn test_update_field_parse() {
        assert_eq!(UpdateField::parse("1").unwrap(), UpdateField::Title);
        assert_eq!(UpdateField::parse("2").unwrap(), UpdateField::Amount);
        assert_eq!(UpdateField::parse("3").unwrap(), UpdateField::Both);
        assert!(UpdateField::parse("4").unwrap_err().is_invalid_selection());
    }

    #[test]
    fn test_update_field_includes() {
        assert!(UpdateField::Title.includes_title());
        assert!(!UpdateField::Title.includes_amount());
        assert!(UpdateField::Both.includes_title());
        assert!(UpdateField::Both.includes_amount());
    }

    #[test]
    fn test_parse_amount_is_lenient() {
        assert_eq!(parse_amount("3.50\n"), 3.5);
        assert_eq!(parse_amount("-2"), -2.0);
        assert_eq!(parse_amount("twelve"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_parse_id_is_lenient() {
        assert_eq!(parse_id(" 7 "), ExpenseId::new(7));
        assert_eq!(parse_id("seven"), ExpenseId::new(0));
        assert_eq!(parse_id("-1"), ExpenseId::new(0));
    }
}
