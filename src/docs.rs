use crate::api::attendance::RegisterResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceSubmission, WorkerSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Recorder API",
        version = "0.1.0",
        description = r#"
## Attendance Recorder

Records daily worker attendance and meals, and reports per-worker totals.

- **Registration**: one record per submission. `meal_cost` is 3 per meal taken
  and `total_pay` is the daily wage on worked days, both computed by the server.
- **Listing**: every stored record.
- **Summary**: days worked, total pay and total meal cost for one worker.

Errors are returned as `{"error": "..."}`.
"#,
    ),
    paths(
        crate::api::attendance::register,
        crate::api::attendance::list_records,
        crate::api::attendance::worker_summary
    ),
    components(
        schemas(
            AttendanceSubmission,
            AttendanceRecord,
            RegisterResponse,
            WorkerSummary
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance and meal tracking APIs"),
    )
)]
pub struct ApiDoc;
