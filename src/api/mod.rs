//! # REST API Module
//!
//! This module defines the HTTP endpoints for the DeWork API.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Welcome message |
//!
//! Paths with no registered handler fall through to actix's default 404
//! response.

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;
