//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! The bootstrap defines exactly one: the welcome endpoint on `/`.

use actix_web::HttpResponse;

use crate::models::WelcomeResponse;

/// Welcome endpoint (root).
///
/// Identifies the API and doubles as the liveness probe: it takes no
/// input, touches no state, and cannot fail.
///
/// ## Endpoint
///
/// `GET /`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8000/
/// ```
///
/// ## Response
///
/// ```json
/// {
///     "message": "Welcome to DeWork API"
/// }
/// ```
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to DeWork API".to_string(),
    })
}
