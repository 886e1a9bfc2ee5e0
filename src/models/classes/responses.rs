use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Class;
use crate::models::PaginationInfo;
use crate::models::users::entities::UserBrief;

// 班级视图：每次读取现算，不做物化缓存
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassView {
    pub class: Class,
    pub teacher: Option<UserBrief>,
    pub is_enrolled: bool,
    // 班级作业总数减去该学生至少提交过一次的作业数
    pub non_submitted_homework_count: i64,
    // 仅学生视角返回；存在任一缴费记录即视为已缴
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fee_paid: Option<bool>,
}

// 班级列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub items: Vec<ClassView>,
    pub pagination: PaginationInfo,
}

// 班级详情响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetailResponse {
    pub class: Class,
    pub teacher: Option<UserBrief>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enrolled: Option<bool>,
    pub has_homeworks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fee_paid: Option<bool>,
}

// 班级名册条目，按加入顺序返回
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct RosterStudent {
    pub student: UserBrief,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
