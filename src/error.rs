use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Error type shared by every handler. Each variant maps to one HTTP
/// status; the body is always `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("order rejected")]
    OrderRejected(Vec<String>),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": format!("{entity} not found") })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": validation_detail(&errors) })),
            )
                .into_response(),
            ApiError::OrderRejected(messages) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": messages })),
            )
                .into_response(),
            ApiError::Database(err) => {
                // Never leak driver errors to the caller.
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Flatten `ValidationErrors` into `{field: [messages]}`, with nested list
/// entries keyed as `items[0].quantity`.
fn validation_detail(errors: &ValidationErrors) -> Value {
    let mut out = Map::new();
    collect_errors("", errors, &mut out);
    Value::Object(out)
}

fn collect_errors(prefix: &str, errors: &ValidationErrors, out: &mut Map<String, Value>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages: Vec<Value> = list
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .map(Value::String)
                    .collect();
                out.insert(path, Value::Array(messages));
            }
            ValidationErrorsKind::Struct(inner) => collect_errors(&path, inner, out),
            ValidationErrorsKind::List(map) => {
                for (index, inner) in map {
                    collect_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
