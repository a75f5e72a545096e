//! # DeWork API Backend Service
//!
//! This is the main entry point for the backend of DeWork, a Web3
//! deposit-escrow platform. The current snapshot provides the service
//! bootstrap:
//!
//! - A REST surface with a single welcome endpoint
//! - A cross-origin policy so browser frontends can call the API
//! - Environment-driven configuration
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   BACKEND SERVICE                     │
//! │                                                       │
//! │   request ──► CORS policy ──► access log ──► routes   │
//! │              (CORS_ORIGINS)   (tracing)     GET /     │
//! │                                                       │
//! │   Deposit and user routers are intended future scope  │
//! │   and are not part of this snapshot.                  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! 1. Copy `.env.example` to `.env` and adjust as needed
//! 2. Start the server: `cargo run`
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CORS_ORIGINS` | `http://localhost:3000` | Comma-separated allowed origins |
//! | `BACKEND_PORT` | `8000` | HTTP listening port |

use actix_web::{middleware, App, HttpServer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod cors;
mod models;

use config::AppConfig;

/// Main entry point for the backend service.
///
/// This function:
/// 1. Initializes logging
/// 2. Loads configuration from environment
/// 3. Launches the HTTP server and blocks until it is terminated
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // =========================================
    // STEP 1: Initialize Logging
    // =========================================
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting DeWork API backend");

    // =========================================
    // STEP 2: Load Configuration
    // =========================================
    dotenvy::dotenv().ok(); // It's okay if .env doesn't exist

    let config = AppConfig::from_env()
        .expect("Failed to load configuration");

    info!("📋 Configuration loaded");
    info!("   Allowed origins: {:?}", config.cors_origins);

    // =========================================
    // STEP 3: Start HTTP Server
    // =========================================
    let server_port = config.server_port;

    info!("🌐 Starting HTTP server on {}:{}", config::BIND_HOST, server_port);

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            // Add request logging middleware
            .wrap(middleware::Logger::default())

            // Attach the cross-origin policy
            .wrap(cors::configure_cors(&cors_origins))

            // Configure API routes
            .configure(api::configure_routes)
    })
    .bind(format!("{}:{}", config::BIND_HOST, server_port))?
    .run()
    .await
}
