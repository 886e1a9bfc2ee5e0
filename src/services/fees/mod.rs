pub mod class_payments;
pub mod ledger;
pub mod record_payment;
pub mod set_class_fee;
pub mod student_payments;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{RecordPaymentRequest, SetClassFeeRequest};
use crate::storage::Storage;

pub use ledger::FeeLedger;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 设置班级收费标准（重复设置按更新处理）
    pub async fn set_class_fee(
        &self,
        request: &HttpRequest,
        fee_data: SetClassFeeRequest,
    ) -> ActixResult<HttpResponse> {
        set_class_fee::set_class_fee(self, request, fee_data).await
    }

    /// 学生缴费
    pub async fn record_payment(
        &self,
        request: &HttpRequest,
        payment_data: RecordPaymentRequest,
    ) -> ActixResult<HttpResponse> {
        record_payment::record_payment(self, request, payment_data).await
    }

    /// 班级缴费概览（教师视角）
    pub async fn class_payments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        class_payments::class_payments(self, request, class_id).await
    }

    /// 学生缴费状态（学生视角）
    pub async fn student_payments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        student_payments::student_payments(self, request, class_id).await
    }
}
