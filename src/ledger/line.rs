use serde::{Deserialize, Serialize};

use super::limits::DEFAULT_USER;

/// A single ledger entry: a signed amount with a label and an owner.
///
/// Negative `value` is an expense, positive is income. `user` is the
/// owning user identifier, lowercase once normalized; `None` stands in
/// for the default user. `flag` is only ever set by the over-limit
/// annotation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLine {
    pub value: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<LineFlag>,
}

impl BudgetLine {
    /// Creates an unowned, unflagged line.
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
            user: None,
            flag: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Effective owner used for limit lookups.
    pub fn owner(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_USER)
    }

    /// Magnitude of the line read as an expense.
    pub fn expense_magnitude(&self) -> f64 {
        -self.value
    }

    /// Normalizes the line into a recorded expense: the owner is
    /// lowercased (absent or empty falls back to the default user) and
    /// the amount is coerced non-positive.
    pub fn into_expense(mut self) -> Self {
        let user = self
            .user
            .take()
            .map(|u| u.to_lowercase())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_USER.to_string());
        self.user = Some(user);
        if self.value > 0.0 {
            self.value = -self.value;
        }
        self
    }

    /// Returns the same line carrying the over-limit marker.
    pub fn flagged(mut self) -> Self {
        self.flag = Some(LineFlag::Limit);
        self
    }
}

/// Marker attached to lines that breach their owner's spending limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineFlag {
    Limit,
}

impl LineFlag {
    pub fn as_str(&self) -> &str {
        match self {
            LineFlag::Limit => "limit",
        }
    }
}
