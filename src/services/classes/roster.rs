use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::RosterStudent;
use crate::models::users::entities::UserBrief;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_roster(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    search: Option<String>,
) -> ActixResult<HttpResponse> {
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

    let members = match storage.list_class_students(class_id).await {
        Ok(members) => members,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class roster: {e}"),
                )),
            );
        }
    };

    let needle = search.as_deref().map(str::to_lowercase);

    // 名册按加入顺序返回
    let mut items = Vec::with_capacity(members.len());
    for member in members {
        let user = match storage.get_user_by_id(member.student_id).await {
            Ok(Some(user)) => user,
            Ok(None) => continue,
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load roster member: {e}"),
                    ),
                ));
            }
        };

        if let Some(needle) = &needle {
            let profile_name = user.profile.profile_name.as_deref().unwrap_or_default();
            if !user.username.to_lowercase().contains(needle)
                && !profile_name.to_lowercase().contains(needle)
            {
                continue;
            }
        }

        items.push(RosterStudent {
            student: UserBrief::from(&user),
            joined_at: member.joined_at,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(items, "Class roster")))
}
