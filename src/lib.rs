//! Expense tracker - a terminal-based, in-memory personal expense log
//!
//! This library provides the core functionality for the `expenses` binary:
//! recording expenses with a title and amount, listing them, and editing or
//! removing them by ID through a line-based text menu. All state lives in
//! memory for one run.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Expense record, ID and partial-update types
//! - `storage`: The in-memory `ExpenseStore`
//! - `services`: Store operations with input normalisation and logging
//! - `display`: Table formatting for terminal output
//! - `cli`: Menu parsing and the interactive shell loop
//! - `config`: Runtime settings
//! - `logging`: Tracing bootstrap
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::ExpenseUpdate;
//! use expense_tracker::services::ExpenseService;
//!
//! let mut service = ExpenseService::new();
//! let coffee = service.add("Coffee", 3.50);
//! service.update(coffee.id, ExpenseUpdate::amount_only(4.00)).unwrap();
//! assert_eq!(service.list()[0].amount, 4.00);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
