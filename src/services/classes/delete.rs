use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::ClassService;
use crate::errors::LMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::cascade::CascadeManager;

pub async fn delete_class(
    service: &ClassService,
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
    let blobs = service.get_blobs(request);

    // 跨实体删除统一走级联管理器，属主校验也在里面
    let cascade = CascadeManager::new(storage, blobs);
    match cascade.delete_class(class_id, uid).await {
        Ok(report) => {
            if !report.blob_failures.is_empty() {
                warn!(
                    "Class {} deleted with {} orphaned audio blob(s)",
                    class_id,
                    report.blob_failures.len()
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Class, homeworks, submissions, audio files, and fees deleted successfully",
            )))
        }
        Err(LMSystemError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::ClassNotFound, "Class not found"),
        )),
        Err(LMSystemError::Authorization(_)) => {
            Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassPermissionDenied,
                "Not authorized to delete this class",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassDeleteFailed,
                format!("Class deletion failed: {e}"),
            )),
        ),
    }
}
