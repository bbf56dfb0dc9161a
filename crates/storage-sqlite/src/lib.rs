//! SQLite storage implementation for the financial score service.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `finscore-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor whose transaction is a refresh's batch commit
//! - Repository implementations for the Z-Score and F-Score tables
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//!
//! ```text
//!   core (domain, reconciler)
//!             │
//!             ▼
//!   storage-sqlite (this crate)
//!             │
//!             ▼
//!         SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod session;

// Repository implementations
pub mod fscores;
pub mod zscores;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use fscores::FScoreRepository;
pub use session::SqliteReconcileSession;
pub use zscores::ZScoreRepository;

// Re-export from finscore-core for convenience
pub use finscore_core::errors::{DatabaseError, Error, Result};
