use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::RecordPaymentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn record_payment(
    service: &FeeService,
    request: &HttpRequest,
    payment_data: RecordPaymentRequest,
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

    if payment_data.amount_paid <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Payment amount must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_class_by_id(payment_data.class_id).await {
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

    match storage.create_fee(uid, payment_data).await {
        Ok(fee) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Payment recorded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::PaymentRecordFailed,
                format!("Failed to record payment: {e}"),
            )),
        ),
    }
}
