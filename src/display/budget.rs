//! Budget display formatting

use crate::config::Settings;
use crate::models::Budget;
use crate::services::BudgetStatus;

/// Format the budget value with the currency symbol
pub fn format_budget(budget: &Budget, settings: &Settings) -> String {
    match budget.amount() {
        Some(amount) => amount.format_with_symbol(&settings.currency_symbol),
        None => "not set".to_string(),
    }
}

/// Format a budget comparison
pub fn format_budget_status(status: &BudgetStatus, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;

    match status {
        BudgetStatus::NotConfigured { .. } => {
            "No budget set. Set a monthly budget first.\n".to_string()
        }
        BudgetStatus::WithinBudget {
            budget,
            total_spent,
            remaining,
        } => format!(
            "Total spent so far: {}\nYou have {} remaining from your {} budget.\n",
            total_spent.format_with_symbol(symbol),
            remaining.format_with_symbol(symbol),
            budget.format_with_symbol(symbol)
        ),
        BudgetStatus::Exceeded {
            budget,
            total_spent,
            over,
        } => format!(
            "Total spent so far: {}\nYou have exceeded your {} budget by {}.\n",
            total_spent.format_with_symbol(symbol),
            budget.format_with_symbol(symbol),
            over.format_with_symbol(symbol)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_budget() {
        let settings = Settings::default();
        assert_eq!(format_budget(&Budget::Unset, &settings), "not set");
        assert_eq!(
            format_budget(&Budget::Set(Money::from_cents(100000)), &settings),
            "₹1000.00"
        );
    }

    #[test]
    fn test_format_status() {
        let settings = Settings::default();

        let unset = BudgetStatus::NotConfigured {
            total_spent: Money::from_cents(100),
        };
        assert!(format_budget_status(&unset, &settings).starts_with("No budget set"));

        let within = BudgetStatus::evaluate(
            Budget::Set(Money::from_cents(100000)),
            Money::from_cents(30000),
        )
        .unwrap();
        let output = format_budget_status(&within, &settings);
        assert!(output.contains("Total spent so far: ₹300.00"));
        assert!(output.contains("You have ₹700.00 remaining from your ₹1000.00 budget."));

        let over = BudgetStatus::evaluate(
            Budget::Set(Money::from_cents(50000)),
            Money::from_cents(65000),
        )
        .unwrap();
        assert!(format_budget_status(&over, &settings)
            .contains("exceeded your ₹500.00 budget by ₹150.00"));
    }
}
