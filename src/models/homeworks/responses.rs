use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Homework;
use crate::models::PaginationInfo;

// 作业列表条目，带当前学生是否已提交的标记
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub homework: Homework,
    pub is_submitted: bool,
}

// 作业列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListResponse {
    pub items: Vec<HomeworkListItem>,
    pub pagination: PaginationInfo,
}
