//! Storage layer for the expense tracker
//!
//! All state is held in process memory and discarded on exit.

pub mod expenses;

pub use expenses::ExpenseStore;
