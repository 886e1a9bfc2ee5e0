use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Submission;
use crate::models::users::entities::UserBrief;

// 提交条目，教师视角附带学生信息
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<UserBrief>,
}
