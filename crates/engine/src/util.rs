//! Internal helpers for input normalization and id generation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every command enforces the same rules.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Width of the opaque ids handed out for transactions and goals.
pub(crate) const ID_LEN: usize = 8;

/// Returns a fresh 8-hex-digit id not accepted by `taken`.
///
/// Ids are the leading digits of a random UUID, so collisions are possible;
/// the loop only retries when the id is already in use.
pub(crate) fn short_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        if !taken(&id) {
            return id;
        }
    }
}

/// Trim a required text field, rejecting missing or blank values.
pub(crate) fn normalize_required_text(value: Option<&str>, field: &str) -> ResultEngine<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(EngineError::Validation(format!("{field} is required"))),
    }
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
