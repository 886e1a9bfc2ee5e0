use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{FeeLedger, FeeService};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_payments(
    service: &FeeService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match FeeLedger::new(storage).student_balance(class_id, uid).await {
        Ok(balance) => Ok(HttpResponse::Ok().json(ApiResponse::success(balance, "Payment status"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute payment status: {e}"),
            )),
        ),
    }
}
