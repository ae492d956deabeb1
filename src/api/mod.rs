//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into enrichment calls and formats
//! responses according to the wire contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and panic recovery
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
