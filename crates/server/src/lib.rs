use api_types::Amount;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::{EngineError, Money};
use serde::Serialize;

pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod budgets;
mod goals;
mod server;
mod summary;
mod transactions;

pub mod types {
    pub use api_types::Message;

    pub mod transaction {
        pub use api_types::transaction::{TransactionKind, TransactionNew, TransactionView};
    }

    pub mod budget {
        pub use api_types::budget::{BudgetUpdate, BudgetsView};
    }

    pub mod goal {
        pub use api_types::goal::{GoalNew, GoalView};
    }

    pub mod summary {
        pub use api_types::summary::{FormattedSummary, Summary};
    }
}

/// Message returned for request bodies that do not match the expected schema.
const INVALID_DATA: &str = "Invalid data";

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::BAD_REQUEST,
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", value.body_text());
        Self::Generic(INVALID_DATA.to_string())
    }
}

/// Convert a wire amount (number or numeric string) into an exact decimal.
fn parse_amount(amount: Amount) -> Result<Money, EngineError> {
    match amount {
        Amount::Number(value) => Money::from_number(value),
        Amount::Text(text) => text.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_validation_maps_to_400() {
        let res = ServerError::from(EngineError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::NotFound("Goal".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn parse_amount_accepts_numbers_and_strings() {
        let exact: Money = "12.345".parse().unwrap();
        assert_eq!(parse_amount(Amount::Number(12.345)), Ok(exact));
        assert_eq!(parse_amount(Amount::Text(" 12.345 ".to_string())), Ok(exact));
        assert_eq!(
            parse_amount(Amount::Text("1e3".to_string())).map(|m| m.to_string()),
            Ok("1000".to_string())
        );
        assert!(parse_amount(Amount::Text("99,90".to_string())).is_err());
        assert!(parse_amount(Amount::Text("ten".to_string())).is_err());
        assert!(parse_amount(Amount::Number(1e300)).is_err());
    }
}
