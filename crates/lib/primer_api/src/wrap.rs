//! Response wrapper — the single catch point for request handling.
//!
//! [`wrap`] runs a domain operation exactly once and turns its outcome
//! into an enveloped [`Reply`]. Success keeps the message and status
//! bound at the call site; every failure is captured here and mapped
//! to its kind's status via [`ApiError::status`], so no error leaves a
//! handler unformatted. Domain code below this boundary never builds
//! envelopes itself.

use std::future::Future;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::{Envelope, Reply};
use crate::error::ApiError;

/// Outcome of a wrapped domain operation.
///
/// `Ok(None)` is a deliberate no-content success (e.g. after a
/// delete): the envelope reports `success: true` with `result: null`.
pub type OpResult<T> = Result<Option<T>, ApiError>;

/// Runs `op` once and envelopes its outcome.
///
/// `message` and `status` apply to the success path only; a failure
/// replaces both with the failure's description and mapped status.
/// No retries, no logging, no state across invocations.
pub async fn wrap<T, F>(message: &str, status: StatusCode, op: F) -> Reply
where
    T: Serialize,
    F: Future<Output = OpResult<T>>,
{
    match to_result(op.await) {
        Ok(result) => Reply::new(Envelope::new(result, message, status, true), status),
        Err(e) => {
            let status = e.status();
            Reply::new(Envelope::fail(e.to_string(), status), status)
        }
    }
}

/// Serializes a successful value, collapsing serialization faults to
/// an uncategorized internal failure (status 500).
fn to_result<T: Serialize>(outcome: OpResult<T>) -> Result<Option<Value>, ApiError> {
    outcome?
        .map(|v| serde_json::to_value(v).map_err(|e| ApiError::Internal(e.to_string())))
        .transpose()
}

/// Parses a request body inside the wrapped operation, so malformed
/// JSON surfaces as an enveloped failure rather than an extractor
/// rejection.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|_| ApiError::InvalidInput("Request body must be JSON".into()))
}
