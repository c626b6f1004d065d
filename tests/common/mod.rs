use std::sync::Arc;

use actix_web::web::Data;
use attendance_recorder::recorder::AttendanceRecorder;
use attendance_recorder::store::InMemoryStore;

pub fn recorder(store: &InMemoryStore) -> Data<AttendanceRecorder> {
    Data::new(AttendanceRecorder::new(Arc::new(store.clone())))
}
