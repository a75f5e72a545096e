//! # API Response Models
//!
//! Structures for outgoing API response bodies.

use serde::{Deserialize, Serialize};

/// Root endpoint response.
///
/// Returned by `GET /`.
///
/// ## Example Response
///
/// ```json
/// {
///     "message": "Welcome to DeWork API"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeResponse {
    /// Greeting identifying the API.
    pub message: String,
}
