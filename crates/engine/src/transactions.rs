//! Transaction primitives.
//!
//! A `Transaction` is a single recorded income or expense. Once created it is
//! never mutated or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, Money, ResultEngine,
    util::{normalize_optional_text, normalize_required_text},
};

/// Category assigned when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "Others";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

/// Input for recording a transaction.
///
/// `description` and `amount` are required; the other fields fall back to
/// `expense`, [`DEFAULT_CATEGORY`] and the current date.
#[derive(Clone, Debug, Default)]
pub struct TransactionCmd {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub(crate) fn new(id: String, cmd: TransactionCmd, today: NaiveDate) -> ResultEngine<Self> {
        let description = normalize_required_text(cmd.description.as_deref(), "desc")?;
        let amount = cmd
            .amount
            .ok_or_else(|| EngineError::Validation("amount is required".to_string()))?;
        if amount.is_negative() {
            return Err(EngineError::Validation(
                "amount must not be negative".to_string(),
            ));
        }

        Ok(Self {
            id,
            description,
            amount,
            kind: cmd.kind.unwrap_or_default(),
            category: normalize_optional_text(cmd.category.as_deref())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            date: cmd.date.unwrap_or(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn fills_defaults() {
        let tx = Transaction::new(
            "abcd1234".to_string(),
            TransactionCmd {
                description: Some("Lunch".to_string()),
                amount: Some(Money::new(dec!(50))),
                ..Default::default()
            },
            today(),
        )
        .unwrap();

        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category, DEFAULT_CATEGORY);
        assert_eq!(tx.date, today());
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let tx = Transaction::new(
            "abcd1234".to_string(),
            TransactionCmd {
                description: Some("Bus".to_string()),
                amount: Some(Money::new(dec!(20))),
                category: Some("   ".to_string()),
                ..Default::default()
            },
            today(),
        )
        .unwrap();
        assert_eq!(tx.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn kind_names_match_wire_format() {
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert_eq!(TransactionKind::default().as_str(), "expense");
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Transaction::new(
            "abcd1234".to_string(),
            TransactionCmd {
                description: Some("Refund?".to_string()),
                amount: Some(Money::new(dec!(-0.01))),
                ..Default::default()
            },
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
