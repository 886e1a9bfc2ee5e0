use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use super::policy::{MAX_AUDIO_BYTES, SubmissionPolicy};
use crate::errors::LMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::read_audio_form;

pub async fn submit_homework(
    service: &SubmissionService,
    request: &HttpRequest,
    homework_id: i64,
    payload: Multipart,
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

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "Homework not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get homework information: {e}"),
                )),
            );
        }
    }

    let form = match read_audio_form(payload, MAX_AUDIO_BYTES).await {
        Ok(form) => form,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message(),
            )));
        }
    };

    // 次数上限、类型、大小都由提交策略把关
    let policy = SubmissionPolicy::new(storage, service.get_blobs(request));
    match policy.submit(homework_id, uid, form.file.as_ref()).await {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submission,
            "Homework submitted successfully",
        ))),
        Err(LMSystemError::SubmissionLimit(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubmissionLimitExceeded,
                "Maximum 3 submissions allowed per homework",
            )))
        }
        Err(LMSystemError::UnsupportedMediaType(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AudioTypeNotAllowed,
                "Only audio files are allowed",
            )))
        }
        Err(LMSystemError::PayloadTooLarge(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AudioSizeExceeded,
                "File size exceeds 10MB",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubmissionCreateFailed,
                format!("Submission failed: {e}"),
            )),
        ),
    }
}
