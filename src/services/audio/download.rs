use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};

use super::AudioService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn download(
    service: &AudioService,
    request: &HttpRequest,
    blob_id: String,
) -> ActixResult<HttpResponse> {
    let blobs = service.get_blobs(request);

    let blob = match blobs.get(&blob_id).await {
        Ok(Some(blob)) => blob,
        // ID 非法和不存在都按 404 处理
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AudioNotFound,
                "Audio file not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to read audio blob {}: {}", blob_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Audio read failed",
                )),
            );
        }
    };

    // 使用存储时记录的内容类型和原始文件名
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, blob.content_type))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", blob.file_name),
        ))
        .body(blob.data))
}
