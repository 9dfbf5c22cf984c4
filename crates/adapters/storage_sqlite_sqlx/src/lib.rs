//! # bandservice-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `bandservice-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `bandservice-app` (for port traits) and `bandservice-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod band_repo;
mod error;
mod pool;

pub use band_repo::SqliteBandRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
