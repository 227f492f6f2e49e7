//! Route handlers: health, types, numerology, evaluate, profile.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use numen_core::{
    calculate_numerology, profile, NumerologyError, NumerologyInput, NumerologyType, Person,
};
use serde::Deserialize;
use serde_json::Value;

use super::json_error;
use super::state::AppState;
use crate::commands::eval::Batch;
use crate::commands::types::types_json;

/// `?locale=xx` on POST endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    locale: Option<String>,
}

/// HTTP status for an engine error.
fn error_status(e: &NumerologyError) -> StatusCode {
    match e {
        NumerologyError::UnknownType { .. } => StatusCode::NOT_FOUND,
        NumerologyError::InvalidMeanings { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        NumerologyError::MissingField { .. } | NumerologyError::DateFormat { .. } => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn engine_error(e: &NumerologyError) -> Response {
    json_error(error_status(e), &e.to_string()).into_response()
}

fn bad_request(message: &str) -> Response {
    json_error(StatusCode::BAD_REQUEST, message).into_response()
}

/// Unwrap a JSON body, answering malformed or non-JSON bodies with a JSON error.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, Response> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body rejected");
            Err(json_error(rejection.status(), &rejection.body_text()).into_response())
        }
    }
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// GET /types
pub(crate) async fn handle_types() -> impl IntoResponse {
    (StatusCode::OK, Json(types_json()))
}

/// POST /numerology/{type}
pub(crate) async fn handle_numerology(
    State(state): State<Arc<AppState>>,
    Path(type_name): Path<String>,
    Query(query): Query<LocaleQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match json_body(body) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let numerology_type: NumerologyType = match type_name.parse() {
        Ok(t) => t,
        Err(e) => return engine_error(&e),
    };
    let input: NumerologyInput = match serde_json::from_value(body) {
        Ok(i) => i,
        Err(e) => return bad_request(&format!("invalid input: {}", e)),
    };

    let locale = state.locale(&query.locale);
    match calculate_numerology(numerology_type, &input, locale, &state.meanings) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, %numerology_type, "calculation rejected");
            engine_error(&e)
        }
    }
}

/// POST /evaluate
pub(crate) async fn handle_evaluate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match json_body(body) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let batch = match Batch::from_json(body) {
        Ok(b) => b,
        Err(e) => return bad_request(&e),
    };

    match batch.evaluate(&state.meanings, state.locale(&query.locale)) {
        Ok(results) => (StatusCode::OK, Json(batch.results_json(results))).into_response(),
        Err(e) => bad_request(&e),
    }
}

/// POST /profile
pub(crate) async fn handle_profile(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match json_body(body) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let person: Person = match serde_json::from_value(body) {
        Ok(p) => p,
        Err(e) => return bad_request(&format!("invalid person: {}", e)),
    };

    match profile(&person, &state.meanings, state.locale(&query.locale)) {
        Ok(p) => (StatusCode::OK, Json(p)).into_response(),
        Err(e) => engine_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_bad_requests() {
        let missing = NumerologyError::MissingField {
            numerology_type: NumerologyType::LifePath,
            field: "birthDate",
        };
        assert_eq!(error_status(&missing), StatusCode::BAD_REQUEST);
        let date = NumerologyError::DateFormat {
            value: "x".into(),
            reason: "y".into(),
        };
        assert_eq!(error_status(&date), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_type_is_not_found() {
        let e = "tarot".parse::<NumerologyType>().unwrap_err();
        assert_eq!(error_status(&e), StatusCode::NOT_FOUND);
    }
}
