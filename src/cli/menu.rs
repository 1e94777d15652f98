//! Interactive menu
//!
//! A numbered menu loop over the ledger operations. Reads choices from any
//! `BufRead` and writes to any `Write`, so the loop can be driven from tests.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_add_outcome, format_budget, format_budget_status, format_expense_list};
use crate::error::ExpenseResult;
use crate::services::LedgerService;
use crate::storage::Storage;

const MENU: &str = "\n========== Personal Expense Tracker ==========\n\
1. Add Expense\n\
2. View Expenses\n\
3. Set Budget\n\
4. Track Budget\n\
5. Save Expenses\n\
6. Exit\n";

/// A recognized menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    SetBudget,
    TrackBudget,
    Save,
    Exit,
}

impl MenuChoice {
    /// Map a menu entry ("1".."6") to its action
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::SetBudget),
            "4" => Some(Self::TrackBudget),
            "5" => Some(Self::Save),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> ExpenseResult<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the menu until the user exits or input ends
///
/// Exiting (or reaching end of input) saves expenses and budget.
pub fn run_menu<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    let service = LedgerService::new(storage);

    loop {
        write!(output, "{}", MENU)?;
        let choice = match prompt(input, output, "Choose an option (1-6): ")? {
            Some(choice) => choice,
            None => break,
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_expense(&service, settings, input, output)?,
            Some(MenuChoice::View) => match service.view_expenses() {
                Ok(listing) => write!(output, "{}", format_expense_list(&listing, settings))?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Some(MenuChoice::SetBudget) => set_budget(&service, settings, input, output)?,
            Some(MenuChoice::TrackBudget) => match service.track_budget() {
                Ok(status) => write!(output, "{}", format_budget_status(&status, settings))?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Some(MenuChoice::Save) => match service.save() {
                Ok(()) => writeln!(output, "Expenses saved to file.")?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Some(MenuChoice::Exit) => break,
            None => writeln!(
                output,
                "Invalid choice. Please enter a number between 1 and 6."
            )?,
        }
    }

    service.save()?;
    writeln!(output, "Exiting... Your data has been saved.")?;
    Ok(())
}

fn add_expense<R: BufRead, W: Write>(
    service: &LedgerService<'_>,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    let Some(date) = prompt(input, output, "Enter date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, output, "Enter category (e.g., Food, Travel): ")? else {
        return Ok(());
    };
    let Some(amount) = prompt(input, output, "Enter amount: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, output, "Enter description: ")? else {
        return Ok(());
    };

    match service.add_expense(&date, &category, &amount, &description) {
        Ok(outcome) => {
            let budget = format_budget(&service.budget()?, settings);
            write!(
                output,
                "{}",
                format_add_outcome(&outcome, Some(budget), settings)
            )?;
        }
        Err(e) if e.is_validation() => writeln!(output, "Invalid input. {}", e)?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }

    Ok(())
}

fn set_budget<R: BufRead, W: Write>(
    service: &LedgerService<'_>,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    let label = format!("Enter your monthly budget ({}): ", settings.currency_symbol);
    let Some(amount) = prompt(input, output, &label)? else {
        return Ok(());
    };

    match service.set_budget(&amount) {
        Ok(budget) => writeln!(output, "Budget set to {}", format_budget(&budget, settings))?,
        Err(e) if e.is_validation() => {
            writeln!(output, "Invalid input. Please enter a numeric value. {}", e)?
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::LoadMode;
    use crate::models::{Budget, Expense, Money};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all(LoadMode::Lenient).unwrap();
        (temp_dir, storage)
    }

    fn run(storage: &Storage, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(storage, &Settings::default(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 6 \n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_full_session() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(
            &storage,
            "3\n1000\n1\n2024-01-01\nFood\n300\nlunch\n2\n4\n6\n",
        );

        assert!(output.contains("Budget set to ₹1000.00"));
        assert!(output.contains("Expense added successfully."));
        assert!(output.contains("Remaining balance: ₹700.00 of ₹1000.00"));
        assert!(output.contains("1. Date: 2024-01-01, Category: Food"));
        assert!(output.contains("Total spent so far: ₹300.00"));
        assert!(output.contains("Exiting... Your data has been saved."));

        let saved = std::fs::read_to_string(storage.paths().expenses_file()).unwrap();
        assert!(saved.contains("2024-01-01,Food,300.00,lunch"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "9\n6\n");

        assert!(output.contains("Invalid choice."));
        assert_eq!(output.matches("1. Add Expense").count(), 2);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_invalid_add_returns_to_menu() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "1\n2024-99-01\nFood\n10\n\n1\n2024-01-01\nFood\nten\n\n6\n");

        assert_eq!(output.matches("Invalid input.").count(), 2);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_invalid_budget_keeps_value() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "3\n500\n3\nabc\n6\n");

        assert_eq!(
            storage.budget.get().unwrap(),
            Budget::Set(Money::from_cents(50000))
        );
    }

    #[test]
    fn test_track_without_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "4\n6\n");

        assert!(output.contains("No budget set."));
    }

    #[test]
    fn test_view_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "2\n6\n");

        assert!(output.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_end_of_input_saves() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "1\n2024-01-01\nFood\n5\nsnack\n");

        assert!(output.contains("Exiting..."));
        assert!(storage.paths().expenses_file().exists());
        assert!(storage.paths().budget_file().exists());
    }

    #[test]
    fn test_oversized_total_keeps_menu_running() {
        let (_temp_dir, storage) = create_test_storage();
        let huge = Money::parse("50000000000000000000000000000").unwrap();
        for _ in 0..2 {
            storage
                .expenses
                .push(Expense::new("2024-01-01", "A", huge, ""))
                .unwrap();
        }

        let output = run(&storage, "2\n4\n6\n");

        assert!(output.contains("2. Date: 2024-01-01, Category: A"));
        assert_eq!(output.matches("Error: ").count(), 1);
        assert!(output.contains("Exiting... Your data has been saved."));
    }

    #[test]
    fn test_explicit_save() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run(&storage, "1\n2024-01-01\nFood\n5\n\n5\n6\n");

        assert!(output.contains("Expenses saved to file."));
    }
}
