use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, ClassViewBuilder};
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::{ClassListQuery, ClassQueryParams};
use crate::models::classes::responses::ClassListResponse;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

// 全部班级，学生浏览报名用
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: None,
        student_id: None,
        search: query.search,
    };
    run_list(service, request, list_query, "All classes fetched successfully").await
}

// 当前学生已报名的班级
pub async fn list_enrolled_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
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
    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: None,
        student_id: Some(uid),
        search: query.search,
    };
    run_list(
        service,
        request,
        list_query,
        "Enrolled classes fetched successfully",
    )
    .await
}

// 当前教师开设的班级
pub async fn list_taught_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
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
    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: Some(uid),
        student_id: None,
        search: query.search,
    };
    run_list(
        service,
        request,
        list_query,
        "Teacher classes fetched successfully",
    )
    .await
}

async fn run_list(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassListQuery,
    message: &str,
) -> ActixResult<HttpResponse> {
    let viewer: User = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    let storage = service.get_storage(request);

    let (classes, pagination) = match storage.list_classes_with_pagination(query).await {
        Ok(page) => page,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list classes: {e}"),
                )),
            );
        }
    };

    // 每个条目现算视图标记
    let builder = ClassViewBuilder::new(storage);
    let mut items = Vec::with_capacity(classes.len());
    for class in classes {
        match builder.build(class, &viewer).await {
            Ok(view) => items.push(view),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to build class view: {e}"),
                    ),
                ));
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassListResponse { items, pagination },
        message,
    )))
}
