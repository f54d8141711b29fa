//! Configuration module for the expense tracker
//!
//! Runtime settings only: log level and log format. The tracker keeps no
//! configuration files.

pub mod settings;

pub use settings::{LogFormat, Settings};
