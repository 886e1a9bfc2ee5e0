use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{RecordPaymentRequest, SetClassFeeRequest};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 FEE_SERVICE 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

// HTTP处理程序
pub async fn set_class_fee(
    req: HttpRequest,
    fee_data: web::Json<SetClassFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.set_class_fee(&req, fee_data.into_inner()).await
}

pub async fn record_payment(
    req: HttpRequest,
    payment_data: web::Json<RecordPaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .record_payment(&req, payment_data.into_inner())
        .await
}

pub async fn class_payments(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.class_payments(&req, class_id.0).await
}

pub async fn student_payments(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.student_payments(&req, class_id.0).await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/class").route(
                    web::post()
                        .to(set_class_fee)
                        // 教师设置班级收费标准（重复设置按更新处理）
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/pay").route(
                    web::post()
                        .to(record_payment)
                        // 学生缴费
                        .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(class_payments)
                        // 教师查看班级缴费概览
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/student/{class_id}").route(
                    web::get()
                        .to(student_payments)
                        // 学生查看自己的缴费状态
                        .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                ),
            ),
    );
}
