use crate::api::attendance;
use actix_web::{HttpResponse, error::InternalError, web};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same `{"error": ...}` shape as every other failure.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({
            "error": message
        })))
        .into()
    });

    cfg.app_data(json_config)
        // /registro
        .service(web::resource("/registro").route(web::post().to(attendance::register)))
        // /registros
        .service(web::resource("/registros").route(web::get().to(attendance::list_records)))
        // /worker/{id}/summary
        .service(
            web::resource("/worker/{id}/summary")
                .route(web::get().to(attendance::worker_summary)),
        );
}
