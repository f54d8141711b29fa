//! Interactive command-line front end
//!
//! This module contains the text menu and its input parsing, bridging the
//! user's terminal with the service layer.

pub mod menu;
pub mod shell;

pub use menu::{parse_amount, parse_id, MenuChoice, UpdateField};
pub use shell::Shell;
