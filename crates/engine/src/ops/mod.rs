//! `Engine` operations, one module per resource.

mod budgets;
mod goals;
mod summary;
mod transactions;
