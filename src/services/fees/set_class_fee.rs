use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::SetClassFeeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_class_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_data: SetClassFeeRequest,
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

    if fee_data.amount < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Fee amount must not be negative",
        )));
    }

    let storage = service.get_storage(request);

    // 班级必须存在且属于当前教师
    let class = match storage.get_class_by_id(fee_data.class_id).await {
        Ok(Some(class)) => class,
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
    };
    if class.teacher_id != uid {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "You can only set the fee for your own class",
        )));
    }

    match storage.upsert_class_fee(uid, fee_data).await {
        Ok(class_fee) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class_fee,
            "Class fee set successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassFeeSetFailed,
                format!("Failed to set class fee: {e}"),
            )),
        ),
    }
}
