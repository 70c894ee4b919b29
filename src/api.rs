//! Request and response bodies for the HTTP surface.
//!
//! Shared by the route handlers and the remote run source so both sides of
//! the wire agree on field names.

use serde::{Deserialize, Serialize};

/// `POST /sort` body. Both fields are optional at the wire boundary so a
/// missing field is reported as a client error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub array: Option<Vec<i64>>,
}

/// `POST /generate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub array: Vec<i64>,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
