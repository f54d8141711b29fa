//! Expense service
//!
//! Wraps the in-memory store with input normalisation and logging. The
//! shell talks to this service, never to the store directly.

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, ExpenseUpdate};
use crate::storage::ExpenseStore;

/// Service for expense management
#[derive(Debug, Default)]
pub struct ExpenseService {
    store: ExpenseStore,
}

impl ExpenseService {
    /// Create a service over an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense
    ///
    /// The title is trimmed; empty titles and any amount are accepted.
    pub fn add(&mut self, title: &str, amount: f64) -> Expense {
        let expense = self.store.add(title.trim(), amount);
        tracing::info!(id = %expense.id, title = %expense.title, amount, "expense added");
        expense
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.store.list()
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.store.get(id)
    }

    /// Apply a partial update to an expense
    pub fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> ExpenseResult<Expense> {
        let update = ExpenseUpdate {
            title: update.title.map(|t| t.trim().to_string()),
            amount: update.amount,
        };

        let after = self.store.update(id, &update).inspect_err(|e| {
            tracing::warn!(%id, error = %e, "expense update rejected");
        })?;

        tracing::info!(%id, title = %after.title, amount = after.amount, "expense updated");
        Ok(after)
    }

    /// Delete an expense
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self.store.delete(id).inspect_err(|e| {
            tracing::warn!(%id, error = %e, "expense delete rejected");
        })?;

        tracing::info!(%id, title = %removed.title, "expense deleted");
        Ok(removed)
    }

    /// Number of expenses
    pub fn count(&self) -> usize {
        self.store.len()
    }
}
