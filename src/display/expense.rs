//! Expense display formatting
//!
//! Formats expenses for terminal output as a fixed-width table.

use crate::models::Expense;

/// Message shown when there is nothing to list
pub const EMPTY_MESSAGE: &str = "No expenses found";

/// Format a list of expenses as a table
///
/// Starts with a blank line, then the header, a separator and one row per
/// expense with the amount shown to two decimal places.
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format!("{:<4} | {:<19} | {}\n", "ID", "Title", "Amount"));
    output.push_str(&format!("{}\n", "-".repeat(37)));

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    // Drop the trailing newline so callers can println! the result
    output.pop();
    output
}

/// Format a single table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<4} | {:<19} | {:.2}",
        expense.id.to_string(),
        expense.title,
        expense.amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found");
    }

    #[test]
    fn test_zero_amount_is_not_empty() {
        let expenses = vec![Expense::new(ExpenseId::new(1), "Free sample", 0.0)];
        let output = format_expense_list(&expenses);
        assert!(output.contains("0.00"));
        assert!(!output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_table_layout() {
        let expenses = vec![
            Expense::new(ExpenseId::new(1), "Coffee", 3.5),
            Expense::new(ExpenseId::new(12), "Book", 12.0),
        ];

        let output = format_expense_list(&expenses);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "ID   | Title               | Amount");
        assert_eq!(lines[2], "-------------------------------------");
        assert_eq!(lines[3], "1    | Coffee              | 3.50");
        assert_eq!(lines[4], "12   | Book                | 12.00");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_long_title_is_not_truncated() {
        let title = "A very long expense title indeed";
        let row = format_expense_row(&Expense::new(ExpenseId::new(3), title, -1.005));
        assert!(row.contains(title));
        assert!(row.starts_with("3    | "));
    }
}
