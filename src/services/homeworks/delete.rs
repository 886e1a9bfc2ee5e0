use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::HomeworkService;
use crate::errors::LMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::cascade::CascadeManager;

pub async fn delete_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
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
    let blobs = service.get_blobs(request);

    let cascade = CascadeManager::new(storage, blobs);
    match cascade.delete_homework(homework_id, uid).await {
        Ok(report) => {
            if !report.blob_failures.is_empty() {
                warn!(
                    "Homework {} deleted with {} orphaned audio blob(s)",
                    homework_id,
                    report.blob_failures.len()
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Homework and related submissions deleted successfully",
            )))
        }
        Err(LMSystemError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::HomeworkNotFound, "Homework not found"),
        )),
        Err(LMSystemError::Authorization(_)) => {
            Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::HomeworkPermissionDenied,
                "Not authorized to delete this homework",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::HomeworkDeleteFailed,
                format!("Homework deletion failed: {e}"),
            )),
        ),
    }
}
