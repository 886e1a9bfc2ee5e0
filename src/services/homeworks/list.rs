use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::middlewares::RequireJWT;
use crate::models::homeworks::requests::{HomeworkListQuery, HomeworkQueryParams};
use crate::models::homeworks::responses::{HomeworkListItem, HomeworkListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_class_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    class_id: i64,
    query: HomeworkQueryParams,
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

    match storage.get_class_by_id(class_id).await {
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

    let list_query = HomeworkListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: Some(class_id),
        search: query.search,
    };

    let (homeworks, pagination) = match storage.list_homeworks_with_pagination(list_query).await {
        Ok(page) => page,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list homeworks: {e}"),
                )),
            );
        }
    };

    // 当前用户对本页作业的提交情况
    let homework_ids: Vec<i64> = homeworks.iter().map(|h| h.id).collect();
    let submitted: HashSet<i64> = match storage
        .list_submitted_homework_ids(uid, &homework_ids)
        .await
    {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query submissions: {e}"),
                )),
            );
        }
    };

    let items: Vec<HomeworkListItem> = homeworks
        .into_iter()
        .map(|homework| {
            let is_submitted = submitted.contains(&homework.id);
            HomeworkListItem {
                homework,
                is_submitted,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HomeworkListResponse { items, pagination },
        "Homework list",
    )))
}
