//! Transactions API endpoints

use api_types::transaction::{TransactionKind as ApiKind, TransactionNew, TransactionView};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, parse_amount, server::ServerState};

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Expense => ApiKind::Expense,
    }
}

fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        description: tx.description,
        amount: tx.amount.to_f64(),
        kind: map_kind(tx.kind),
        category: tx.category,
        date: tx.date,
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<TransactionView>> {
    let transactions = state
        .engine
        .transactions()
        .await
        .into_iter()
        .map(map_transaction)
        .collect();

    Json(transactions)
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let Json(payload) = payload?;

    let tx = state
        .engine
        .add_transaction(engine::TransactionCmd {
            description: payload.description,
            amount: payload.amount.map(parse_amount).transpose()?,
            kind: payload.kind.map(|kind| match kind {
                ApiKind::Income => engine::TransactionKind::Income,
                ApiKind::Expense => engine::TransactionKind::Expense,
            }),
            category: payload.category,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}
