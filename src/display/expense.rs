//! Expense display formatting
//!
//! Formats expense listings and add confirmations for the terminal.

use std::fmt::Write;

use crate::config::Settings;
use crate::models::Expense;
use crate::services::{AddOutcome, ExpenseListing};

/// Date as configured for display, falling back to the stored text
fn display_date(expense: &Expense, settings: &Settings) -> String {
    let Some(date) = expense.parsed_date() else {
        return expense.date.clone();
    };

    // An unusable format string surfaces as a fmt error, not a panic
    let mut output = String::new();
    match write!(output, "{}", date.format(&settings.date_format)) {
        Ok(()) => output,
        Err(_) => expense.date.clone(),
    }
}

/// Format a single numbered expense line
pub fn format_expense_row(index: usize, expense: &Expense, settings: &Settings) -> String {
    format!(
        "{}. Date: {}, Category: {}, Amount: {}, Description: {}",
        index,
        display_date(expense, settings),
        expense.category,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.description
    )
}

/// Format the whole ledger
pub fn format_expense_list(listing: &ExpenseListing, settings: &Settings) -> String {
    let expenses = match listing {
        ExpenseListing::Empty => return "No expenses recorded yet.\n".to_string(),
        ExpenseListing::Expenses(expenses) => expenses,
    };

    let mut output = String::from("Expense List:\n");
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense, settings));
        output.push('\n');
    }
    output
}

/// Format the confirmation shown after adding an expense
pub fn format_add_outcome(
    outcome: &AddOutcome,
    budget_display: Option<String>,
    settings: &Settings,
) -> String {
    let mut output = String::from("Expense added successfully.\n");

    if let Some(remaining) = outcome.remaining {
        let symbol = &settings.currency_symbol;
        if remaining.is_negative() {
            output.push_str(&format!(
                "Over budget! You've exceeded it by {}.\n",
                remaining.abs().format_with_symbol(symbol)
            ));
        } else {
            output.push_str(&format!(
                "Remaining balance: {}{}\n",
                remaining.format_with_symbol(symbol),
                budget_display
                    .map(|b| format!(" of {}", b))
                    .unwrap_or_default()
            ));
        }
    }

    output
}
