//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// This function is called from main.rs to set up all the endpoint routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// └── /    GET - Welcome message
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - welcome message
        .route("/", web::get().to(handlers::welcome));

    // Deposit and user routers will be registered here once those
    // services exist.
}
