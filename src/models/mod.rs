//! # API Models
//!
//! This module defines the response structures for the REST API.
//!
//! ## Serialization
//!
//! All models use Serde for JSON serialization. Field names are converted
//! to camelCase for JavaScript clients.

pub mod responses;

pub use responses::*;
