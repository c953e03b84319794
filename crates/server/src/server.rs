use axum::{
    Json, Router,
    routing::{delete, get, post},
};

use std::sync::Arc;

use crate::{budgets, goals, summary, transactions};
use api_types::Message;
use engine::Engine;

const LIVENESS_MESSAGE: &str = "Finance tracker backend is running";

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn home() -> Json<Message> {
    Json(Message {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

/// Build the API router around `engine`.
pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/", get(home))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/budgets",
            get(budgets::get).post(budgets::update).put(budgets::update),
        )
        .route("/goals", get(goals::list).post(goals::create))
        .route("/goals/{id}", delete(goals::delete))
        .route("/goals/{id}/deposit", post(goals::deposit))
        .route("/summary", get(summary::get))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
