//! Interactive text-menu shell
//!
//! Reads one menu choice per iteration, runs exactly one service operation,
//! and prints its outcome. Every recoverable error is rendered as a message;
//! only terminal I/O failures end the loop early.

use std::io::{BufRead, Write};

use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseUpdate;
use crate::services::ExpenseService;

use super::menu::{parse_amount, parse_id, MenuChoice, UpdateField};

const TITLE: &str = "--- Personal Expense Tracker ---";
const MSG_ADDED: &str = "Expense added successfully";
const MSG_UPDATED: &str = "Expense updated successfully";
const MSG_DELETED: &str = "Expense deleted successfully";
const MSG_NOT_FOUND: &str = "Expense not found";
const MSG_INVALID: &str = "Invalid choice";
const MSG_EXIT: &str = "Exiting application";

/// Line-based menu loop over arbitrary input and output streams
pub struct Shell<R, W> {
    input: R,
    output: W,
    service: ExpenseService,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an empty expense store
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            service: ExpenseService::new(),
        }
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Enter choice: ")? else {
                tracing::debug!("input closed, leaving menu loop");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Add) => self.add_expense()?,
                Ok(MenuChoice::View) => self.view_expenses()?,
                Ok(MenuChoice::Update) => self.update_expense()?,
                Ok(MenuChoice::Delete) => self.delete_expense()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", MSG_EXIT)?;
                    self.output.flush()?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu input");
                    writeln!(self.output, "{}", MSG_INVALID)?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", TITLE)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        let title = self.prompt_field("Enter title: ")?;
        let amount = parse_amount(&self.prompt_field("Enter amount: ")?);

        self.service.add(&title, amount);
        writeln!(self.output, "{}", MSG_ADDED)?;
        Ok(())
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "{}", format_expense_list(self.service.list()))?;
        Ok(())
    }

    fn update_expense(&mut self) -> ExpenseResult<()> {
        let id = parse_id(&self.prompt_field("Enter expense ID: ")?);

        if self.service.get(id).is_none() {
            writeln!(self.output, "{}", MSG_NOT_FOUND)?;
            return Ok(());
        }

        writeln!(self.output, "What do you want to update?")?;
        for field in UpdateField::ALL {
            writeln!(self.output, "{}. {}", field.number(), field.label())?;
        }
        let selection = self.prompt_field("Enter choice: ")?;

        let field = match UpdateField::parse(&selection) {
            Ok(field) => field,
            Err(e) => {
                tracing::debug!(%id, error = %e, "rejected update field");
                writeln!(self.output, "{}", MSG_INVALID)?;
                return Ok(());
            }
        };

        let mut update = ExpenseUpdate::default();
        if field.includes_title() {
            update.title = Some(self.prompt_field("Enter new title: ")?);
        }
        if field.includes_amount() {
            update.amount = Some(parse_amount(&self.prompt_field("Enter new amount: ")?));
        }

        match self.service.update(id, update) {
            Ok(_) => writeln!(self.output, "{}", MSG_UPDATED)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn delete_expense(&mut self) -> ExpenseResult<()> {
        let id = parse_id(&self.prompt_field("Enter expense ID: ")?);

        match self.service.delete(id) {
            Ok(_) => writeln!(self.output, "{}", MSG_DELETED)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    /// Render a recoverable error, propagating anything else
    fn report(&mut self, err: ExpenseError) -> ExpenseResult<()> {
        match err {
            ExpenseError::NotFound { .. } => writeln!(self.output, "{}", MSG_NOT_FOUND)?,
            ExpenseError::InvalidSelection(_) => writeln!(self.output, "{}", MSG_INVALID)?,
            other => return Err(other),
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, but end of input reads as an empty line
    fn prompt_field(&mut self, prompt: &str) -> ExpenseResult<String> {
        Ok(self.prompt(prompt)?.unwrap_or_default())
    }
}
