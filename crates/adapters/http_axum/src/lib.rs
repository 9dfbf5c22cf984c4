//! # bandservice-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **band REST API** (`/bands`, `/bands/{id}`, `/bands/report`, …)
//! - Relay user lookups to the external user service (`/bands/bb/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `bandservice-app` (for port traits and services) and
//! `bandservice-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
