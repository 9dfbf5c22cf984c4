//! # bandservice-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BandRepository` — CRUD for bands
//!   - `UserDirectory` — lookups against the external user service
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BandService` — create, read, update, delete, reports, readiness checks
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `bandservice-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
