use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::errors::LMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::requests::{CreateHomeworkRequest, NewHomework};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::policy::{MAX_AUDIO_BYTES, SubmissionPolicy};
use crate::utils::read_audio_form;

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
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

    let form = match read_audio_form(payload, MAX_AUDIO_BYTES).await {
        Ok(form) => form,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message(),
            )));
        }
    };

    // 表单字段
    let homework_data = match parse_fields(&form) {
        Ok(fields) => fields,
        Err(message) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
        }
    };

    let due_date = match chrono::DateTime::parse_from_rfc3339(&homework_data.due_date) {
        Ok(due_date) => due_date.with_timezone(&chrono::Utc),
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Invalid due_date, expected RFC 3339",
            )));
        }
    };

    let storage = service.get_storage(request);

    // 班级必须存在且属于当前教师
    let class = match storage.get_class_by_id(homework_data.class_id).await {
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
            ErrorCode::HomeworkPermissionDenied,
            "You can only create homework in your own class",
        )));
    }

    // 示范音频先过校验并写入 Blob 存储，失败时不会建作业记录
    let reference_audio_id = match &form.file {
        Some(file) => {
            let policy = SubmissionPolicy::new(storage.clone(), service.get_blobs(request));
            match policy.store_reference_audio(uid, file).await {
                Ok(blob_id) => Some(blob_id),
                Err(LMSystemError::UnsupportedMediaType(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::AudioTypeNotAllowed,
                        "Only audio files are allowed",
                    )));
                }
                Err(LMSystemError::PayloadTooLarge(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::AudioSizeExceeded,
                        "File size exceeds 10MB",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::AudioUploadFailed,
                            format!("Failed to store reference audio: {e}"),
                        ),
                    ));
                }
            }
        }
        None => None,
    };

    match storage
        .create_homework(
            uid,
            NewHomework {
                class_id: homework_data.class_id,
                title: homework_data.title,
                description: homework_data.description,
                due_date,
                reference_audio_id,
            },
        )
        .await
    {
        Ok(homework) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            homework,
            "Homework created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::HomeworkCreateFailed,
                format!("Homework creation failed: {e}"),
            )),
        ),
    }
}

fn parse_fields(form: &crate::utils::AudioForm) -> Result<CreateHomeworkRequest, String> {
    let class_id = form
        .required("class_id")
        .map_err(|e| e.message().to_string())?
        .parse::<i64>()
        .map_err(|_| "Invalid class_id".to_string())?;

    let title = form
        .required("title")
        .map_err(|e| e.message().to_string())?
        .to_string();

    let due_date = form
        .required("due_date")
        .map_err(|e| e.message().to_string())?
        .to_string();

    Ok(CreateHomeworkRequest {
        class_id,
        title,
        description: form.optional("description"),
        due_date,
    })
}
