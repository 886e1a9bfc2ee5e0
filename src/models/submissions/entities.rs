use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 关联的作业 ID
    pub homework_id: i64,
    // 提交学生 ID
    pub student_id: i64,
    // 答案音频的 Blob ID，允许无附件提交
    pub audio_id: Option<String>,
    // 评分
    pub grade: Option<f64>,
    // 评语
    pub feedback: Option<String>,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
