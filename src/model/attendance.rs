use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of `registros`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "worker_id": "w1",
        "worked": true,
        "breakfast": true,
        "lunch": false,
        "dinner": true,
        "total_pay": 50.0,
        "meal_cost": 6,
        "created_at": "2026-01-01T08:00:00"
    })
)]
pub struct AttendanceRecord {
    pub id: u64,
    pub worker_id: String,
    pub worked: bool,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub total_pay: f64,
    pub meal_cost: i32,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

/// A validated record waiting for the store to assign `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub worker_id: String,
    pub worked: bool,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub total_pay: f64,
    pub meal_cost: i32,
}

impl NewAttendance {
    pub fn into_record(self, id: u64, created_at: NaiveDateTime) -> AttendanceRecord {
        AttendanceRecord {
            id,
            worker_id: self.worker_id,
            worked: self.worked,
            breakfast: self.breakfast,
            lunch: self.lunch,
            dinner: self.dinner,
            total_pay: self.total_pay,
            meal_cost: self.meal_cost,
            created_at,
        }
    }
}

/// Worker identifiers arrive either as JSON strings or integers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WorkerId {
    Text(String),
    Number(i64),
}

impl WorkerId {
    /// Empty strings and zero count as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            WorkerId::Text(s) => s.is_empty(),
            WorkerId::Number(n) => *n == 0,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            WorkerId::Text(s) => s,
            WorkerId::Number(n) => n.to_string(),
        }
    }
}

/// Body of `POST /registro`. Every field is optional here so that
/// missing data is reported by the recorder, not by the JSON extractor.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct AttendanceSubmission {
    #[schema(value_type = String, example = "w1")]
    pub worker_id: Option<WorkerId>,

    #[schema(example = true)]
    pub worked: Option<bool>,

    #[schema(example = true)]
    pub breakfast: Option<bool>,

    #[schema(example = false)]
    pub lunch: Option<bool>,

    #[schema(example = true)]
    pub dinner: Option<bool>,

    #[schema(example = 50.0)]
    pub daily_wage: Option<f64>,
}

/// Aggregate totals for a single worker. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct WorkerSummary {
    #[schema(example = "w1")]
    pub worker_id: String,
    #[schema(example = 1)]
    pub days_worked: i64,
    #[schema(example = 50.0)]
    pub total_pay: f64,
    #[schema(example = 6)]
    pub total_meal_cost: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_id_accepts_string_or_integer() {
        let text: WorkerId = serde_json::from_str(r#""w1""#).unwrap();
        let number: WorkerId = serde_json::from_str("42").unwrap();

        assert_eq!(text.into_string(), "w1");
        assert_eq!(number.into_string(), "42");
    }

    #[test]
    fn blank_worker_ids() {
        assert!(WorkerId::Text(String::new()).is_blank());
        assert!(WorkerId::Number(0).is_blank());
        assert!(!WorkerId::Text(" ".into()).is_blank());
        assert!(!WorkerId::Number(-3).is_blank());
    }

    #[test]
    fn submission_treats_null_as_absent() {
        let s: AttendanceSubmission =
            serde_json::from_str(r#"{"worker_id":"w1","worked":null,"daily_wage":10}"#).unwrap();
        assert_eq!(s.worked, None);
        assert_eq!(s.breakfast, None);
        assert_eq!(s.daily_wage, Some(10.0));
    }
}
