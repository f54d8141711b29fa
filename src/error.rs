//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenseId;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Update/delete target does not exist in the store
    #[error("Expense not found: {id}")]
    NotFound { id: ExpenseId },

    /// Malformed menu or sub-menu choice, or an update with nothing to change
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExpenseError {
    /// Create a "not found" error for an expense ID
    pub fn not_found(id: ExpenseId) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid selection error
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
