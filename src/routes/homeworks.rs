use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::homeworks::requests::HomeworkQueryParams;
use crate::models::users::entities::UserRole;
use crate::services::{HomeworkService, SubmissionService};
use crate::utils::{SafeClassIdI64, SafeHomeworkIdI64};

// 懒加载的全局服务实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn create_homework(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.create_homework(&req, payload).await
}

pub async fn list_class_homeworks(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<HomeworkQueryParams>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_class_homeworks(&req, class_id.0, query.into_inner())
        .await
}

pub async fn delete_homework(
    req: HttpRequest,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.delete_homework(&req, homework_id.0).await
}

pub async fn submit_homework(
    req: HttpRequest,
    homework_id: SafeHomeworkIdI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_homework(&req, homework_id.0, payload)
        .await
}

pub async fn list_submissions_for_homework(
    req: HttpRequest,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions_for_homework(&req, homework_id.0)
        .await
}

pub async fn list_my_submissions(
    req: HttpRequest,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_my_submissions(&req, homework_id.0)
        .await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/homeworks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_homework)
                        // 教师布置作业（multipart，可带示范音频）
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    // 师生都可以查看班级作业列表
                    web::get()
                        .to(list_class_homeworks)
                        .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                ),
            )
            .service(
                web::resource("/{homework_id}").route(
                    web::delete()
                        .to(delete_homework)
                        // 教师删除自己的作业（级联）
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{homework_id}/submissions")
                    .route(
                        web::post()
                            .to(submit_homework)
                            // 学生提交作业（multipart，可带音频）
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    )
                    .route(
                        web::get()
                            .to(list_submissions_for_homework)
                            // 教师查看全部提交
                            .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                    ),
            )
            .service(
                web::resource("/{homework_id}/submissions/mine").route(
                    web::get()
                        .to(list_my_submissions)
                        // 学生查看自己的提交历史
                        .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                ),
            ),
    );
}
