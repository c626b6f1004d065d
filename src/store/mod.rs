//! # Data Store
//!
//! The recorder talks to `registros` only through [`DataStore`], so the
//! hosted MySQL backend can be swapped for the in-memory one in tests or
//! local runs.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::init_db;
use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, NewAttendance, WorkerSummary};

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;

#[async_trait]
pub trait DataStore: Send + Sync {
    /// Insert one record and return it with its store-assigned fields.
    async fn insert(&self, entry: NewAttendance) -> Result<AttendanceRecord, StoreError>;

    /// Every record, in whatever order the store yields them.
    async fn select_all(&self) -> Result<Vec<AttendanceRecord>, StoreError>;

    /// Aggregate rows for `worker_id`, grouped by worker. Normally zero or one row.
    async fn select_summary(&self, worker_id: &str) -> Result<Vec<WorkerSummary>, StoreError>;
}

/// Build the store named by `DATABASE_URL`.
pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn DataStore>> {
    if config.uses_memory_store() {
        warn!("DATABASE_URL selects the in-memory store; records are lost on restart");
        return Ok(Arc::new(InMemoryStore::new()));
    }

    let pool = init_db(config)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    Ok(Arc::new(MySqlStore::new(pool)))
}
