//! Domain engine of the finance tracker.
//!
//! [`Engine`] owns the whole in-memory store (transactions, budgets and
//! savings goals) behind a single lock. Each operation takes the lock once,
//! so concurrent callers see the same last-writer-wins behaviour as a
//! single-threaded loop.
use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;

pub use budgets::{Budgets, DEFAULT_BUDGETS};
pub use currency::Currency;
pub use error::EngineError;
pub use goals::{DEPOSIT_STEP, Goal, GoalCmd};
pub use money::Money;
pub use summary::Summary;
pub use transactions::{DEFAULT_CATEGORY, Transaction, TransactionCmd, TransactionKind};

mod budgets;
mod currency;
mod error;
mod goals;
mod money;
mod ops;
mod summary;
mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// Source of "today" for transactions recorded without a date.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Process-lifetime state. Only reachable through the `Engine` lock.
#[derive(Debug, Default)]
struct Store {
    transactions: Vec<Transaction>,
    budgets: Budgets,
    goals: Vec<Goal>,
}

#[derive(Debug)]
pub struct Engine {
    store: Mutex<Store>,
    currency: Currency,
    today: Clock,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Currency used for every amount handled by this engine.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The builder for `Engine`
///
/// Without overrides the engine starts empty apart from the
/// [`DEFAULT_BUDGETS`] caps, and undated transactions get the local date.
pub struct EngineBuilder {
    budgets: Budgets,
    today: Clock,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            budgets: Budgets::default(),
            today: local_today,
        }
    }
}

impl EngineBuilder {
    /// Replace the initial budget mapping.
    pub fn budgets(mut self, budgets: Budgets) -> EngineBuilder {
        self.budgets = budgets;
        self
    }

    /// Override the date assigned to transactions recorded without one.
    pub fn clock(mut self, today: Clock) -> EngineBuilder {
        self.today = today;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            store: Mutex::new(Store {
                budgets: self.budgets,
                ..Store::default()
            }),
            currency: Currency::default(),
            today: self.today,
        }
    }
}
