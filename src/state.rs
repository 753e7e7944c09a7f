//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the request handlers. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::{cache::lot_listing::LotListingCache, jobs::JobQueue};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool,
/// the cache handle wraps an `Arc`, and the job queue is a channel sender.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Read-through cache for the public lot listing.
    pub lot_cache: LotListingCache,

    /// Queue feeding the background job worker.
    pub jobs: JobQueue,
}

impl AppState {
    pub fn new(db: DatabaseConnection, lot_cache: LotListingCache, jobs: JobQueue) -> Self {
        Self { db, lot_cache, jobs }
    }
}
