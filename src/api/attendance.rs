use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::attendance::{AttendanceRecord, AttendanceSubmission, WorkerSummary};
use crate::recorder::AttendanceRecorder;

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "Attendance recorded successfully")]
    pub message: String,
    pub data: AttendanceRecord,
}

/// Record one day of attendance and meals
#[utoipa::path(
    post,
    path = "/registro",
    request_body = AttendanceSubmission,
    responses(
        (status = 201, description = "Attendance recorded", body = RegisterResponse),
        (status = 400, description = "Missing required data", body = Object, example = json!({
            "error": "Missing required data."
        })),
        (status = 500, description = "Data store error", body = Object, example = json!({
            "error": "connection refused"
        }))
    ),
    tag = "Attendance"
)]
pub async fn register(
    recorder: web::Data<AttendanceRecorder>,
    payload: web::Json<AttendanceSubmission>,
) -> actix_web::Result<impl Responder> {
    let record = recorder.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Attendance recorded successfully".to_string(),
        data: record,
    }))
}

/// List every attendance record
#[utoipa::path(
    get,
    path = "/registros",
    responses(
        (status = 200, description = "All records, in store order", body = [AttendanceRecord]),
        (status = 500, description = "Data store error")
    ),
    tag = "Attendance"
)]
pub async fn list_records(
    recorder: web::Data<AttendanceRecorder>,
) -> actix_web::Result<impl Responder> {
    let records = recorder.list_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Totals for one worker
#[utoipa::path(
    get,
    path = "/worker/{id}/summary",
    params(
        ("id", description = "Worker identifier")
    ),
    responses(
        (status = 200, description = "Totals for the worker", body = WorkerSummary),
        (status = 500, description = "Data store error, or no records for the worker", body = Object, example = json!({
            "error": "JSON object requested, multiple (or no) rows returned"
        }))
    ),
    tag = "Attendance"
)]
pub async fn worker_summary(
    recorder: web::Data<AttendanceRecorder>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let worker_id = path.into_inner();
    let summary = recorder.summarize(&worker_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}
