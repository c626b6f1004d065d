use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, NewAttendance, WorkerSummary};

use super::DataStore;

/// `registros` on a MySQL-compatible server.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for MySqlStore {
    async fn insert(&self, entry: NewAttendance) -> Result<AttendanceRecord, StoreError> {
        let created_at = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            INSERT INTO registros
            (worker_id, worked, breakfast, lunch, dinner, total_pay, meal_cost, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.worker_id)
        .bind(entry.worked)
        .bind(entry.breakfast)
        .bind(entry.lunch)
        .bind(entry.dinner)
        .bind(entry.total_pay)
        .bind(entry.meal_cost)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        debug!(id, worker_id = %entry.worker_id, "Inserted attendance record");

        Ok(entry.into_record(id, created_at))
    }

    async fn select_all(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, worker_id, worked, breakfast, lunch, dinner, total_pay, meal_cost, created_at
            FROM registros
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn select_summary(&self, worker_id: &str) -> Result<Vec<WorkerSummary>, StoreError> {
        // SUM over INT yields DECIMAL in MySQL; cast so the row decodes into i64.
        // worker_id is compared byte for byte whatever the column collation.
        let rows = sqlx::query_as::<_, WorkerSummary>(
            r#"
            SELECT worker_id,
                   CAST(SUM(CASE WHEN worked THEN 1 ELSE 0 END) AS SIGNED) AS days_worked,
                   SUM(total_pay) AS total_pay,
                   CAST(SUM(meal_cost) AS SIGNED) AS total_meal_cost
            FROM registros
            WHERE worker_id = ? COLLATE utf8mb4_bin
            GROUP BY worker_id
            "#,
        )
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
