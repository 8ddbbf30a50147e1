//! The standardized response envelope.
//!
//! Every endpoint answers with the same four-field shape:
//!
//! ```json
//! { "success": bool, "message": string, "statusCode": int, "result": <any|null> }
//! ```
//!
//! An envelope is built fresh per request, never mutated after
//! construction, and serialized exactly once.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed-shape success/failure wrapper returned by every endpoint.
///
/// Invariant: `success == false` implies `result` is `None`. The
/// converse does not hold — a no-content success (e.g. a delete)
/// legitimately carries `result: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
    pub result: Option<Value>,
}

impl Envelope {
    /// Builds an envelope with fields set verbatim from the inputs.
    ///
    /// Pure and total: no validation, no derived logic.
    pub fn new(
        result: Option<Value>,
        message: impl Into<String>,
        status: StatusCode,
        success: bool,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            status_code: status.as_u16(),
            result,
        }
    }

    /// A success envelope (default message "Success", status 200).
    pub fn ok(result: Option<Value>) -> Self {
        Self::new(result, "Success", StatusCode::OK, true)
    }

    /// A failure envelope: no result, `success: false`.
    pub fn fail(message: impl Into<String>, status: StatusCode) -> Self {
        Self::new(None, message, status, false)
    }
}

/// An envelope paired with the transport status to emit.
#[derive(Debug, Clone)]
pub struct Reply {
    pub envelope: Envelope,
    pub status: StatusCode,
}

impl Reply {
    pub fn new(envelope: Envelope, status: StatusCode) -> Self {
        Self { envelope, status }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            Json(self.envelope),
        )
            .into_response()
    }
}
