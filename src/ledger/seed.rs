use once_cell::sync::Lazy;

use super::line::BudgetLine;

/// Canonical starting ledger. Never handed out by reference.
static INITIAL_BUDGET: Lazy<Vec<BudgetLine>> = Lazy::new(|| {
    vec![
        BudgetLine::new(250.0, "Sold old TV 📺").with_user("jonas"),
        BudgetLine::new(-45.0, "Groceries 🥑").with_user("jonas"),
        BudgetLine::new(3500.0, "Monthly salary 👩‍💻").with_user("jonas"),
        BudgetLine::new(300.0, "Freelancing 👩‍💻").with_user("jonas"),
        BudgetLine::new(-1100.0, "New iPhone 📱").with_user("jonas"),
        BudgetLine::new(-20.0, "Candy 🍭").with_user("matilda"),
        BudgetLine::new(-125.0, "Toys 🚂").with_user("matilda"),
        BudgetLine::new(-1800.0, "New Laptop 💻").with_user("jonas"),
    ]
});

/// Fresh copy of the starting ledger; callers own the returned vector
/// outright.
pub fn initial_budget() -> Vec<BudgetLine> {
    INITIAL_BUDGET.clone()
}
