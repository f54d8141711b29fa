//! Expense model
//!
//! A single spending record plus the partial-update input used to edit it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent; sign and range are not constrained
    pub amount: f64,
}

impl Expense {
    /// Create a new expense record
    pub fn new(id: ExpenseId, title: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.title, self.amount)
    }
}

/// Fields to change on an existing expense
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<f64>,
}

impl ExpenseUpdate {
    /// Change only the title
    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            amount: None,
        }
    }

    /// Change only the amount
    pub fn amount_only(amount: f64) -> Self {
        Self {
            title: None,
            amount: Some(amount),
        }
    }

    /// Change both fields
    pub fn both(title: impl Into<String>, amount: f64) -> Self {
        Self {
            title: Some(title.into()),
            amount: Some(amount),
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none()
    }

    /// Write the present fields onto `expense`
    pub fn apply(&self, expense: &mut Expense) {
        if let Some(title) = &self.title {
            expense.title = title.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
    }
}
