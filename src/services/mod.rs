//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input normalisation and logging.

pub mod expense;

pub use expense::ExpenseService;
