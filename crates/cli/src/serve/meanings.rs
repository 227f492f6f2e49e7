//! Meanings resource endpoint with ETag support.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::state::AppState;

/// Compute SHA-256 etag from compact JSON representation.
pub(crate) fn compute_etag(value: &Value) -> String {
    let canonical = value.to_string();
    let hash = Sha256::digest(canonical.as_bytes());
    format!("{:x}", hash)
}

/// GET /meanings
///
/// Returns the active meanings resource. Sets the ETag response header and
/// answers a matching If-None-Match with 304 Not Modified.
pub(crate) async fn handle_meanings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let etag = &state.meanings_etag;
    let etag_quoted = format!("\"{}\"", etag);

    if let Some(inm) = headers.get(header::IF_NONE_MATCH) {
        if let Ok(inm_str) = inm.to_str() {
            let matches = inm_str
                .split(',')
                .map(str::trim)
                .any(|tag| tag == "*" || tag == etag_quoted || tag == etag);
            if matches {
                return StatusCode::NOT_MODIFIED.into_response();
            }
        }
    }

    let mut response = Json(state.meanings.to_json()).into_response();
    if let Ok(val) = etag_quoted.parse() {
        response.headers_mut().insert(header::ETAG, val);
    }
    response
}
