use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::fees::entities::FeeFrequency;

// 上课时间表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSchedule {
    // 周几上课，如 ["Monday", "Wednesday"]
    pub days: Vec<String>,
    // 开始时间，如 "18:30"
    pub start_time: String,
    // 结束时间
    pub end_time: String,
}

// 班级自带的收费模板（正式收费标准见 ClassFee）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassFeeTemplate {
    pub amount: f64,
    pub frequency: FeeFrequency,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub title: String,
    // 班级描述
    pub description: Option<String>,
    // 线上课链接
    pub url: Option<String>,
    // 教师ID，创建后不可变更
    pub teacher_id: i64,
    // 上课时间表
    pub schedule: Option<ClassSchedule>,
    // 开课日期
    pub start_date: String,
    // 结课日期
    pub end_date: String,
    // 收费模板
    pub fee: Option<ClassFeeTemplate>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
