use serde::{Deserialize, Serialize};

/// Money as it appears in request bodies, in major units.
///
/// Clients send either a JSON number (`50`, `12.345`) or a numeric string
/// (`"1e3"`); the server turns both into an exact decimal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// Plain `{"message": ...}` body used by liveness and delete responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod transaction {
    use chrono::NaiveDate;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    /// Request body for recording a transaction.
    ///
    /// `desc` and `amount` are required; presence is checked by the engine so
    /// that a missing field is reported as a validation error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionNew {
        #[serde(rename = "desc")]
        pub description: Option<String>,
        pub amount: Option<Amount>,
        #[serde(rename = "type")]
        pub kind: Option<TransactionKind>,
        pub category: Option<String>,
        /// Calendar date, `YYYY-MM-DD`.
        pub date: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: String,
        #[serde(rename = "desc")]
        pub description: String,
        pub amount: f64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        pub date: NaiveDate,
    }
}

pub mod budget {
    use std::collections::BTreeMap;

    use serde_json::Value;

    /// Request body for the bulk update: category name to new cap.
    ///
    /// Caps are stored exactly as sent; only the object shape is checked.
    pub type BudgetUpdate = BTreeMap<String, Value>;

    /// Full category to cap mapping.
    pub type BudgetsView = BTreeMap<String, Value>;
}

pub mod goal {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct GoalNew {
        pub name: Option<String>,
        pub target: Option<Amount>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GoalView {
        pub id: String,
        pub name: String,
        pub target: f64,
        pub saved: f64,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summary {
        pub income: f64,
        pub expense: f64,
        pub balance: f64,
        pub formatted: FormattedSummary,
    }

    /// The same totals rendered with currency symbol and grouping, e.g.
    /// `₹1,250.00`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FormattedSummary {
        pub income: String,
        pub expense: String,
        pub balance: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{budget::BudgetUpdate, goal::GoalNew, transaction::*, *};

    #[test]
    fn amount_accepts_numbers_and_strings() {
        let body: GoalNew = serde_json::from_str(r#"{"target": 12.345}"#).unwrap();
        assert_eq!(body.target, Some(Amount::Number(12.345)));

        let body: GoalNew = serde_json::from_str(r#"{"target": "250.50"}"#).unwrap();
        assert_eq!(body.target, Some(Amount::Text("250.50".to_string())));
    }

    #[test]
    fn budget_update_keeps_any_cap_value() {
        let body: BudgetUpdate =
            serde_json::from_str(r#"{"Food": 1800, "Books": "lots", "Rent": null}"#).unwrap();
        assert_eq!(body["Food"], json!(1800));
        assert_eq!(body["Books"], json!("lots"));
        assert_eq!(body["Rent"], json!(null));
    }

    #[test]
    fn budget_update_must_be_an_object() {
        assert!(serde_json::from_str::<BudgetUpdate>("[1, 2]").is_err());
        assert!(serde_json::from_str::<BudgetUpdate>("1500").is_err());
    }

    #[test]
    fn transaction_new_uses_wire_names() {
        let body: TransactionNew = serde_json::from_str(
            r#"{"desc": "Lunch", "amount": 50, "type": "income", "date": "2024-02-29"}"#,
        )
        .unwrap();
        assert_eq!(body.description.as_deref(), Some("Lunch"));
        assert_eq!(body.kind, Some(TransactionKind::Income));
        assert!(body.category.is_none());
        assert_eq!(body.date.map(|d| d.to_string()).as_deref(), Some("2024-02-29"));
    }

    #[test]
    fn transaction_new_tolerates_missing_required_fields() {
        let body: TransactionNew = serde_json::from_str(r#"{"amount": 5}"#).unwrap();
        assert!(body.description.is_none());
    }

    #[test]
    fn transaction_new_rejects_unknown_type() {
        let body = serde_json::from_str::<TransactionNew>(r#"{"desc": "x", "type": "gift"}"#);
        assert!(body.is_err());
    }
}
