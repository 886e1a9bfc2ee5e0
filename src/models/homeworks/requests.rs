use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 作业查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建作业请求（multipart 表单字段，文件单独处理）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct CreateHomeworkRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    // RFC 3339 格式的截止时间
    pub due_date: String,
}

// 新作业（存储层边界，字段已校验、示范音频已写入 Blob 存储）
#[derive(Debug, Clone)]
pub struct NewHomework {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub reference_audio_id: Option<String>,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}
