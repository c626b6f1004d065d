use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::error::{RecorderError, SINGLE_ROW_VIOLATION, StoreError};
use crate::model::attendance::{
    AttendanceRecord, AttendanceSubmission, NewAttendance, WorkerSummary,
};
use crate::store::DataStore;

/// Cost charged per meal taken.
pub const MEAL_UNIT_COST: i32 = 3;

pub fn meal_cost(breakfast: bool, lunch: bool, dinner: bool) -> i32 {
    MEAL_UNIT_COST * [breakfast, lunch, dinner].into_iter().filter(|m| *m).count() as i32
}

pub fn total_pay(worked: bool, daily_wage: f64) -> f64 {
    if worked { daily_wage } else { 0.0 }
}

/// Checks required fields and derives the monetary columns.
///
/// A zero `daily_wage` is rejected like a missing one.
pub fn validate(submission: AttendanceSubmission) -> Result<NewAttendance, RecorderError> {
    let worker_id = submission
        .worker_id
        .filter(|id| !id.is_blank())
        .ok_or(RecorderError::Validation)?;
    let worked = submission.worked.ok_or(RecorderError::Validation)?;
    let daily_wage = submission
        .daily_wage
        .filter(|w| *w != 0.0)
        .ok_or(RecorderError::Validation)?;

    let breakfast = submission.breakfast.unwrap_or(false);
    let lunch = submission.lunch.unwrap_or(false);
    let dinner = submission.dinner.unwrap_or(false);

    Ok(NewAttendance {
        worker_id: worker_id.into_string(),
        worked,
        breakfast,
        lunch,
        dinner,
        total_pay: total_pay(worked, daily_wage),
        meal_cost: meal_cost(breakfast, lunch, dinner),
    })
}

/// Records attendance into, and answers queries from, the injected store.
#[derive(Clone)]
pub struct AttendanceRecorder {
    store: Arc<dyn DataStore>,
}

impl AttendanceRecorder {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    #[instrument(skip_all)]
    pub async fn register(
        &self,
        submission: AttendanceSubmission,
    ) -> Result<AttendanceRecord, RecorderError> {
        let entry = validate(submission)?;
        debug!(
            worker_id = %entry.worker_id,
            total_pay = entry.total_pay,
            meal_cost = entry.meal_cost,
            "Registering attendance"
        );

        let record = self.store.insert(entry).await.map_err(|e| {
            error!(error = %e, "Failed to insert attendance record");
            e
        })?;

        Ok(record)
    }

    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, RecorderError> {
        let records = self.store.select_all().await.map_err(|e| {
            error!(error = %e, "Failed to fetch attendance records");
            e
        })?;

        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn summarize(&self, worker_id: &str) -> Result<WorkerSummary, RecorderError> {
        let rows = self.store.select_summary(worker_id).await.map_err(|e| {
            error!(error = %e, "Failed to fetch worker summary");
            e
        })?;

        let [row] = <[WorkerSummary; 1]>::try_from(rows).map_err(|rows| {
            error!(rows = rows.len(), "Worker summary did not return exactly one row");
            StoreError::new(SINGLE_ROW_VIOLATION)
        })?;

        Ok(WorkerSummary {
            worker_id: worker_id.to_string(),
            ..row
        })
    }
}
