//! 班级学生存储操作

use super::SeaOrmStorage;
use crate::entity::class_students::{ActiveModel, Column, Entity as ClassStudents};
use crate::errors::{LMSystemError, Result};
use crate::models::class_students::entities::ClassStudent;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 学生报名
    ///
    /// 已在班级中时直接返回 false，名册不会出现重复记录
    /// （唯一索引兜底并发下的双写）。
    pub async fn enroll_student_impl(&self, class_id: i64, student_id: i64) -> Result<bool> {
        if self.is_student_enrolled_impl(class_id, student_id).await? {
            return Ok(false);
        }

        let model = ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("学生报名失败: {e}")))?;

        Ok(true)
    }

    /// 学生是否已在班级中
    pub async fn is_student_enrolled_impl(&self, class_id: i64, student_id: i64) -> Result<bool> {
        let count = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(count > 0)
    }

    /// 班级名册，按加入顺序
    pub async fn list_class_students_impl(&self, class_id: i64) -> Result<Vec<ClassStudent>> {
        let results = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::JoinedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询班级名册失败: {e}")))?;

        Ok(results
            .into_iter()
            .map(|m| m.into_class_student())
            .collect())
    }

    /// 删除班级全部成员关系
    pub async fn delete_class_students_by_class_impl(&self, class_id: i64) -> Result<u64> {
        let result = ClassStudents::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除班级成员失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
