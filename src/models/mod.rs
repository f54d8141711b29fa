//! Core data models for the expense tracker

pub mod expense;
pub mod ids;

pub use expense::{Expense, ExpenseUpdate};
pub use ids::ExpenseId;
