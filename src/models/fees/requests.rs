use serde::Deserialize;
use ts_rs::TS;

use super::entities::FeeFrequency;

// 设置班级收费标准请求（重复设置按更新处理）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct SetClassFeeRequest {
    pub class_id: i64,
    pub amount: f64,
    pub frequency: FeeFrequency,
}

// 学生缴费请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct RecordPaymentRequest {
    pub class_id: i64,
    pub amount_paid: f64,
    pub description: Option<String>,
}
