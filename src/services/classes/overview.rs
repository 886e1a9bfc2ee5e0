//! 班级视图构建
//!
//! 组合报名状态、缴费标记和作业完成度。每次读取现算，
//! 代价是每班级 O(作业数 + 提交数) 的查询，换取无需维护物化视图。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::models::classes::responses::{ClassDetailResponse, ClassView};
use crate::models::users::entities::{User, UserBrief, UserRole};
use crate::storage::Storage;

pub struct ClassViewBuilder {
    storage: Arc<dyn Storage>,
}

impl ClassViewBuilder {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 列表条目视图
    ///
    /// `non_submitted_homework_count` 按 distinct 作业数算：
    /// 同一作业提交多次只抵一个。
    pub async fn build(&self, class: Class, viewer: &User) -> Result<ClassView> {
        let teacher = self
            .storage
            .get_user_by_id(class.teacher_id)
            .await?
            .map(|u| UserBrief::from(&u));

        let is_enrolled = self
            .storage
            .is_student_enrolled(class.id, viewer.id)
            .await?;

        let homework_ids = self.storage.list_homework_ids_by_class(class.id).await?;
        let submitted = self
            .storage
            .list_submitted_homework_ids(viewer.id, &homework_ids)
            .await?;
        let non_submitted_homework_count = (homework_ids.len() - submitted.len()) as i64;

        let is_fee_paid = match viewer.role {
            UserRole::Student => Some(self.storage.has_fee_record(class.id, viewer.id).await?),
            UserRole::Teacher => None,
        };

        Ok(ClassView {
            class,
            teacher,
            is_enrolled,
            non_submitted_homework_count,
            is_fee_paid,
        })
    }

    /// 详情视图
    ///
    /// 报名和缴费标记只对学生视角有意义，教师视角返回 None。
    pub async fn build_detail(&self, class: Class, viewer: &User) -> Result<ClassDetailResponse> {
        let teacher = self
            .storage
            .get_user_by_id(class.teacher_id)
            .await?
            .map(|u| UserBrief::from(&u));

        let homework_ids = self.storage.list_homework_ids_by_class(class.id).await?;
        let has_homeworks = !homework_ids.is_empty();

        let (is_enrolled, is_fee_paid) = match viewer.role {
            UserRole::Student => (
                Some(
                    self.storage
                        .is_student_enrolled(class.id, viewer.id)
                        .await?,
                ),
                Some(self.storage.has_fee_record(class.id, viewer.id).await?),
            ),
            UserRole::Teacher => (None, None),
        };

        Ok(ClassDetailResponse {
            class,
            teacher,
            is_enrolled,
            has_homeworks,
            is_fee_paid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::models::fees::requests::RecordPaymentRequest;
    use crate::models::homeworks::requests::NewHomework;
    use crate::storage::memory::MemoryStorage;

    async fn seed_class(storage: &MemoryStorage, teacher_id: i64) -> Class {
        storage
            .create_class(
                teacher_id,
                CreateClassRequest {
                    title: "Cello 201".to_string(),
                    description: None,
                    url: None,
                    start_date: "2025-09-01".to_string(),
                    end_date: "2026-01-31".to_string(),
                    schedule: None,
                    fee: None,
                },
            )
            .await
            .unwrap()
    }

    async fn seed_homework(storage: &MemoryStorage, teacher_id: i64, class_id: i64) -> i64 {
        storage
            .create_homework(
                teacher_id,
                NewHomework {
                    class_id,
                    title: "Scales".to_string(),
                    description: None,
                    due_date: chrono::Utc::now(),
                    reference_audio_id: None,
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_non_submitted_count_uses_distinct_homeworks() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let student = storage.seed_user("student1", UserRole::Student).await;
        let class = seed_class(&storage, teacher.id).await;
        let hw1 = seed_homework(&storage, teacher.id, class.id).await;
        let _hw2 = seed_homework(&storage, teacher.id, class.id).await;

        // 对 hw1 提交两次，hw2 没有提交
        storage.create_submission(hw1, student.id, None).await.unwrap();
        storage.create_submission(hw1, student.id, None).await.unwrap();

        let builder = ClassViewBuilder::new(storage.clone());
        let view = builder.build(class, &student).await.unwrap();
        assert_eq!(view.non_submitted_homework_count, 1);
    }

    #[tokio::test]
    async fn test_enrollment_and_fee_flags_for_student() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let student = storage.seed_user("student1", UserRole::Student).await;
        let class = seed_class(&storage, teacher.id).await;
        storage.enroll_student(class.id, student.id).await.unwrap();
        storage
            .create_fee(
                student.id,
                RecordPaymentRequest {
                    class_id: class.id,
                    amount_paid: 5.0,
                    description: None,
                },
            )
            .await
            .unwrap();

        let builder = ClassViewBuilder::new(storage.clone());
        let view = builder.build(class, &student).await.unwrap();
        assert!(view.is_enrolled);
        assert_eq!(view.is_fee_paid, Some(true));
    }

    #[tokio::test]
    async fn test_teacher_view_omits_fee_flag() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let class = seed_class(&storage, teacher.id).await;

        let builder = ClassViewBuilder::new(storage.clone());
        let view = builder.build(class.clone(), &teacher).await.unwrap();
        assert!(view.is_fee_paid.is_none());

        let detail = builder.build_detail(class, &teacher).await.unwrap();
        assert!(detail.is_enrolled.is_none());
        assert!(detail.is_fee_paid.is_none());
        assert!(!detail.has_homeworks);
    }
}
