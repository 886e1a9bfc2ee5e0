use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Fee;
use crate::models::users::entities::UserBrief;

// 班级缴费概览：名册按"是否存在缴费记录"二分
//
// 注意这里的"已缴"只看有没有缴费记录，不看是否缴满，
// 与 StudentBalance 的差额核算是两套并存的口径。
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct ClassPaymentSummary {
    pub paid: Vec<UserBrief>,
    pub unpaid: Vec<UserBrief>,
}

// 学生在某班级的缴费状态
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct StudentBalance {
    pub total_paid: f64,
    // 收费标准金额减去累计已缴；超缴为负数，无收费标准时为 0
    pub remaining: f64,
    pub payments: Vec<Fee>,
}
