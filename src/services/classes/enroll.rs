use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::EnrollClassRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll(
    service: &ClassService,
    request: &HttpRequest,
    enroll_data: EnrollClassRequest,
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
    let class_id = enroll_data.class_id;

    let class = match storage.get_class_by_id(class_id).await {
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

    // 重复报名不是错误，名册保持无重复
    match storage.enroll_student(class_id, uid).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Enrolled successfully"))),
        Err(e) => {
            error!("Error enrolling student {} in class {}: {}", uid, class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassEnrollFailed,
                    "Failed to enroll in class",
                )),
            )
        }
    }
}
