//! Savings goals API endpoints

use api_types::{
    Message,
    goal::{GoalNew, GoalView},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, parse_amount, server::ServerState};

fn map_goal(goal: engine::Goal) -> GoalView {
    GoalView {
        id: goal.id,
        name: goal.name,
        target: goal.target.to_f64(),
        saved: goal.saved.to_f64(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<GoalView>> {
    let goals = state
        .engine
        .goals()
        .await
        .into_iter()
        .map(map_goal)
        .collect();

    Json(goals)
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<GoalNew>, JsonRejection>,
) -> Result<(StatusCode, Json<GoalView>), ServerError> {
    let Json(payload) = payload?;

    let goal = state
        .engine
        .add_goal(engine::GoalCmd {
            name: payload.name,
            target: payload.target.map(parse_amount).transpose()?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_goal(goal))))
}

pub async fn deposit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<GoalView>, ServerError> {
    let goal = state.engine.deposit(&id).await?;
    Ok(Json(map_goal(goal)))
}

/// Always succeeds, even when no goal has `id`.
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Json<Message> {
    state.engine.delete_goal(&id).await;
    Json(Message {
        message: "Goal deleted".to_string(),
    })
}
