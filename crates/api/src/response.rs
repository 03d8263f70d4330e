//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "mensaje": ... }` acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "mensaje")]
    pub message: &'static str,
}
