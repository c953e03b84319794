//! Per-category spending caps.
//!
//! Caps are targets only: nothing ties them to the transactions recorded
//! under the same category. The engine stores whatever JSON value a client
//! sends as a cap and never interprets it.
use std::collections::BTreeMap;

use serde_json::Value;

/// Caps every new engine starts with, in rupees.
pub const DEFAULT_BUDGETS: [(&str, i64); 5] = [
    ("Food", 1500),
    ("Books", 2000),
    ("Travel", 1200),
    ("Entertainment", 1000),
    ("Others", 1000),
];

/// Mapping from category name to its cap.
#[derive(Clone, Debug, PartialEq)]
pub struct Budgets(BTreeMap<String, Value>);

impl Budgets {
    pub fn new(caps: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self(caps.into_iter().collect())
    }

    pub fn get(&self, category: &str) -> Option<&Value> {
        self.0.get(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, cap)| (name.as_str(), cap))
    }

    /// Adds new categories and overwrites existing ones. Nothing is removed.
    pub(crate) fn merge(&mut self, updates: Budgets) {
        self.0.extend(updates.0);
    }
}

impl Default for Budgets {
    fn default() -> Self {
        Self::new(
            DEFAULT_BUDGETS
                .iter()
                .map(|(name, cap)| (name.to_string(), Value::from(*cap))),
        )
    }
}

impl FromIterator<(String, Value)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
