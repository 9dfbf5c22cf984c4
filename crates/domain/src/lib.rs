//! # bandservice-domain
//!
//! Pure domain model for the band management service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Bands** (the managed entity, unique by name)
//! - Define **Tasks** (scheduled work that requires specific members)
//! - Define **Reports** (read-only projections derived from bands)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod band;
pub mod report;
pub mod task;
