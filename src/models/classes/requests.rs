use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ClassFeeTemplate, ClassSchedule};
use crate::models::common::PaginationQuery;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub schedule: Option<ClassSchedule>,
    pub fee: Option<ClassFeeTemplate>,
}

// 更新班级请求，仅标题/描述/链接可改
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

// 报名请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct EnrollClassRequest {
    pub class_id: i64,
}

// 名册查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct RosterQueryParams {
    pub search: Option<String>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
    pub search: Option<String>,
}
