//! Budget API endpoints

use api_types::budget::{BudgetUpdate, BudgetsView};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::Budgets;

use crate::{ServerError, server::ServerState};

fn map_budgets(budgets: &Budgets) -> BudgetsView {
    budgets
        .iter()
        .map(|(category, cap)| (category.to_string(), cap.clone()))
        .collect()
}

/// Handle requests for the current category caps
pub async fn get(State(state): State<ServerState>) -> Json<BudgetsView> {
    Json(map_budgets(&state.engine.budgets().await))
}

/// Handle bulk updates; categories not named in the body keep their cap
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<BudgetUpdate>, JsonRejection>,
) -> Result<Json<BudgetsView>, ServerError> {
    let Json(payload) = payload?;

    let budgets = state.engine.update_budgets(Budgets::new(payload)).await;
    Ok(Json(map_budgets(&budgets)))
}
