use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::line::BudgetLine;

/// Owner assigned to lines that arrive without one.
pub const DEFAULT_USER: &str = "jonas";

static USER_LIMITS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("jonas", 1500.0), ("matilda", 100.0)]));

/// Fixed spending limit for a user, matched case-insensitively.
///
/// Unknown or empty names resolve to 0.0; that is the normal lookup
/// miss, not an error.
pub fn budget_limit(user_name: &str) -> f64 {
    USER_LIMITS
        .get(user_name.to_lowercase().as_str())
        .copied()
        .unwrap_or(0.0)
}

/// Resolves the maximum allowed expense magnitude for a user.
///
/// Blanket-implemented for every `Fn(&str) -> f64`, so plain functions
/// such as [`budget_limit`] and ad-hoc closures satisfy it
/// interchangeably.
pub trait LimitResolver {
    fn limit_for(&self, user: &str) -> f64;
}

impl<F> LimitResolver for F
where
    F: Fn(&str) -> f64,
{
    fn limit_for(&self, user: &str) -> f64 {
        self(user)
    }
}

/// Builds a predicate testing whether a line's expense magnitude
/// strictly exceeds its owner's resolved limit.
pub fn is_too_much<R: LimitResolver>(limits: &R) -> impl Fn(&BudgetLine) -> bool + '_ {
    move |line| line.expense_magnitude() > limits.limit_for(line.owner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_lookup_is_case_insensitive() {
        assert_eq!(budget_limit("JONAS"), 1500.0);
        assert_eq!(budget_limit("jonas"), 1500.0);
        assert_eq!(budget_limit("Matilda"), 100.0);
    }

    #[test]
    fn unknown_users_resolve_to_zero() {
        assert_eq!(budget_limit("unknown"), 0.0);
        assert_eq!(budget_limit(""), 0.0);
    }

    #[test]
    fn closures_satisfy_the_resolver_seam() {
        let flat = |_: &str| 42.0;
        assert_eq!(flat.limit_for("anyone"), 42.0);
        assert_eq!(budget_limit.limit_for("matilda"), 100.0);
    }

    #[test]
    fn incomes_are_never_too_much_under_nonnegative_limits() {
        let salary = BudgetLine::new(3500.0, "Monthly salary 👩‍💻").with_user("jonas");
        assert!(!is_too_much(&budget_limit)(&salary));
    }

    #[test]
    fn negative_limits_catch_incomes_too() {
        let refund = BudgetLine::new(5.0, "Refund").with_user("jonas");
        let punitive = |_: &str| -10.0;
        assert!(is_too_much(&punitive)(&refund));
    }

    #[test]
    fn unowned_lines_resolve_against_the_default_user() {
        let line = BudgetLine::new(-200.0, "Cinema 🎬");
        assert_eq!(line.owner(), DEFAULT_USER);
        assert!(!is_too_much(&budget_limit)(&line));
    }
}
