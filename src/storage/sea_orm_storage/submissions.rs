//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        homework_id: i64,
        student_id: i64,
        audio_id: Option<String>,
    ) -> Result<Submission> {
        let model = ActiveModel {
            homework_id: Set(homework_id),
            student_id: Set(student_id),
            audio_id: Set(audio_id),
            grade: Set(None),
            feedback: Set(None),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 某作业的全部提交
    pub async fn list_submissions_by_homework_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 某学生对某作业的提交历史
    pub async fn list_submissions_by_homework_and_student_impl(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询提交历史失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 某学生对某作业的提交次数
    pub async fn count_submissions_impl(&self, homework_id: i64, student_id: i64) -> Result<i64> {
        let count = Submissions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询提交次数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 评分
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        // 先检查提交是否存在
        let existing = self.get_submission_by_id_impl(submission_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            grade: Set(Some(grade)),
            feedback: Set(feedback),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("评分失败: {e}")))?;

        self.get_submission_by_id_impl(submission_id).await
    }

    /// 删除某作业的全部提交
    pub async fn delete_submissions_by_homework_impl(&self, homework_id: i64) -> Result<u64> {
        let result = Submissions::delete_many()
            .filter(Column::HomeworkId.eq(homework_id))
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除作业提交失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 给定作业集合中某学生至少提交过一次的作业 ID（去重投影）
    pub async fn list_submitted_homework_ids_impl(
        &self,
        student_id: i64,
        homework_ids: &[i64],
    ) -> Result<Vec<i64>> {
        if homework_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = Submissions::find()
            .select_only()
            .column(Column::HomeworkId)
            .filter(Column::HomeworkId.is_in(homework_ids.to_vec()))
            .filter(Column::StudentId.eq(student_id))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                LMSystemError::database_operation(format!("查询已提交作业ID失败: {e}"))
            })?;

        Ok(ids)
    }
}
