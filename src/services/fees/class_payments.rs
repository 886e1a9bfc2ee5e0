use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{FeeLedger, FeeService};
use crate::models::{ApiResponse, ErrorCode};

pub async fn class_payments(
    service: &FeeService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class information: {e}"),
                )),
            );
        }
    }

    match FeeLedger::new(storage).class_payment_summary(class_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Payment list"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build payment summary: {e}"),
            )),
        ),
    }
}
