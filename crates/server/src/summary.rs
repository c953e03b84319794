//! Summary API endpoint

use api_types::summary::{FormattedSummary, Summary};
use axum::{Json, extract::State};

use crate::server::ServerState;

/// Handle requests for income/expense/balance totals
pub async fn get(State(state): State<ServerState>) -> Json<Summary> {
    let summary = state.engine.summary().await;

    Json(Summary {
        income: summary.income.to_f64(),
        expense: summary.expense.to_f64(),
        balance: summary.balance.to_f64(),
        formatted: FormattedSummary {
            income: summary.formatted_income(),
            expense: summary.formatted_expense(),
            balance: summary.formatted_balance(),
        },
    })
}
