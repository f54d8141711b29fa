//! In-memory expense store
//!
//! Holds expense records in insertion order together with the ID counter.
//! Nothing here touches the filesystem; the store lives for one process run.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate};

/// Ordered collection of expenses with an auto-incrementing ID generator
///
/// `next_id` is strictly greater than every ID ever issued and is never
/// rewound, so deleted IDs are not reused.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create an empty store whose first ID will be 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }

    /// Record a new expense and append it to the end of the sequence
    pub fn add(&mut self, title: impl Into<String>, amount: f64) -> Expense {
        let expense = Expense::new(self.next_id, title, amount);
        self.expenses.push(expense.clone());
        self.next_id = self.next_id.next();
        expense
    }

    /// All current expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Apply a partial update to the expense with the given ID
    ///
    /// Returns the expense as it reads after the update. On error the store
    /// is left untouched.
    pub fn update(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> ExpenseResult<Expense> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::not_found(id))?;

        if update.is_empty() {
            return Err(ExpenseError::InvalidSelection("nothing to update".into()));
        }

        update.apply(expense);
        Ok(expense.clone())
    }

    /// Remove the expense with the given ID, preserving the order of the rest
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::not_found(id))?;

        Ok(self.expenses.remove(index))
    }

    /// The ID the next `add` will issue
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// Number of expenses currently stored
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}
