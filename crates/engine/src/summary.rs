//! Aggregate view over all recorded transactions.
use crate::{Currency, Money, Transaction, TransactionKind};

/// Income, expense and balance totals.
///
/// Derived on demand from the transaction list; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub currency: Currency,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl Summary {
    pub fn from_transactions<'a>(
        currency: Currency,
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Self {
        let (income, expense) = transactions.into_iter().fold(
            (Money::ZERO, Money::ZERO),
            |(income, expense), tx| match tx.kind {
                TransactionKind::Income => (income.saturating_add(tx.amount), expense),
                TransactionKind::Expense => (income, expense.saturating_add(tx.amount)),
            },
        );

        Self {
            currency,
            income,
            expense,
            balance: income.saturating_sub(expense),
        }
    }

    pub fn formatted_income(&self) -> String {
        self.currency.format(self.income)
    }

    pub fn formatted_expense(&self) -> String {
        self.currency.format(self.expense)
    }

    pub fn formatted_balance(&self) -> String {
        self.currency.format(self.balance)
    }
}
