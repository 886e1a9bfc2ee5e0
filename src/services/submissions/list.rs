use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::SubmissionListItem;
use crate::models::users::entities::UserBrief;
use crate::models::{ApiResponse, ErrorCode};

// 教师视角：某作业的全部提交，带学生信息
pub async fn list_submissions_for_homework(
    service: &SubmissionService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
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

    let submissions = match storage.list_submissions_by_homework(homework_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list submissions: {e}"),
                )),
            );
        }
    };

    let mut items = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let student = match storage.get_user_by_id(submission.student_id).await {
            Ok(user) => user.map(|u| UserBrief::from(&u)),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load submitting student: {e}"),
                    ),
                ));
            }
        };
        items.push(SubmissionListItem {
            submission,
            student,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        items,
        "Submissions fetched successfully",
    )))
}

// 学生视角：自己对某作业的提交历史
pub async fn list_my_submissions(
    service: &SubmissionService,
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

    match storage
        .list_submissions_by_homework_and_student(homework_id, uid)
        .await
    {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submissions,
            "Your submissions fetched successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list submissions: {e}"),
            )),
        ),
    }
}
