use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, NewAttendance, WorkerSummary};

use super::DataStore;

/// A process-local store for `registros`.
///
/// Records live in insertion order behind an `Arc<RwLock<..>>`, so clones
/// share the same table. A store built with [`InMemoryStore::failing`]
/// rejects every call with the given message.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<AttendanceRecord>>>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn insert(&self, entry: NewAttendance) -> Result<AttendanceRecord, StoreError> {
        self.check()?;
        let mut records = self.records.write().await;
        let record = entry.into_record(records.len() as u64 + 1, Utc::now().naive_utc());
        records.push(record.clone());
        Ok(record)
    }

    async fn select_all(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.check()?;
        Ok(self.records.read().await.clone())
    }

    async fn select_summary(&self, worker_id: &str) -> Result<Vec<WorkerSummary>, StoreError> {
        self.check()?;
        let records = self.records.read().await;

        let mut rows = records.iter().filter(|r| r.worker_id == worker_id).peekable();
        if rows.peek().is_none() {
            return Ok(Vec::new());
        }

        let summary = rows.fold(
            WorkerSummary {
                worker_id: worker_id.to_string(),
                days_worked: 0,
                total_pay: 0.0,
                total_meal_cost: 0,
            },
            |mut acc, r| {
                if r.worked {
                    acc.days_worked += 1;
                }
                acc.total_pay += r.total_pay;
                acc.total_meal_cost += i64::from(r.meal_cost);
                acc
            },
        );

        Ok(vec![summary])
    }
}
