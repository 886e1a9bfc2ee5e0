//! 多实体级联删除
//!
//! 删除班级/作业时，元数据和 Blob 分属两个存储，没有跨库事务。
//! 这里是唯一允许做跨实体删除编排的地方：属主校验不通过或目标
//! 不存在时整体中止；一旦开始删除，顺序固定为子先于父（提交音频
//! → 提交记录 → 示范音频 → 作业记录 → 费用 → 班级），中途只有
//! 元数据错误会中断。Blob 删除是尽力而为：失败记入报告和日志，
//! 绝不阻塞元数据清理——元数据是事实源，整体成败只看元数据结果。

use std::sync::Arc;

use tracing::{error, warn};

use crate::errors::{LMSystemError, Result};
use crate::models::homeworks::entities::Homework;
use crate::storage::Storage;
use crate::storage::blob::BlobStore;

/// 单次 Blob 删除失败
#[derive(Debug, Clone)]
pub struct BlobFailure {
    pub blob_id: String,
    pub error: String,
}

/// 级联删除结果
///
/// 返回 Ok 即所有元数据已删除；blob_failures 非空表示有音频
/// 残留在 Blob 存储里。
#[derive(Debug, Default)]
pub struct CascadeReport {
    pub homeworks_deleted: u64,
    pub submissions_deleted: u64,
    pub fees_deleted: u64,
    pub class_fee_deleted: bool,
    pub students_removed: u64,
    pub blob_failures: Vec<BlobFailure>,
}

pub struct CascadeManager {
    storage: Arc<dyn Storage>,
    blobs: Arc<dyn BlobStore>,
}

impl CascadeManager {
    pub fn new(storage: Arc<dyn Storage>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { storage, blobs }
    }

    /// 删除班级及其全部作业、提交、音频和费用记录
    ///
    /// 仅班级属主教师可调用。
    pub async fn delete_class(&self, class_id: i64, requester_id: i64) -> Result<CascadeReport> {
        let class = self
            .storage
            .get_class_by_id(class_id)
            .await?
            .ok_or_else(|| LMSystemError::not_found(format!("班级不存在: {class_id}")))?;

        if class.teacher_id != requester_id {
            return Err(LMSystemError::authorization(
                "只有班级所属教师可以删除班级",
            ));
        }

        let mut report = CascadeReport::default();

        // 逐个作业清理，每个作业内部同样子先于父
        let homeworks = self.storage.list_homeworks_by_class(class_id).await?;
        for homework in &homeworks {
            self.delete_homework_tree(homework, &mut report).await?;
        }

        report.fees_deleted = self.storage.delete_fees_by_class(class_id).await?;
        report.class_fee_deleted = self.storage.delete_class_fee_by_class(class_id).await?;
        report.students_removed = self
            .storage
            .delete_class_students_by_class(class_id)
            .await?;

        self.storage.delete_class(class_id).await?;

        if !report.blob_failures.is_empty() {
            warn!(
                "班级 {} 删除完成，但有 {} 个音频未能从 Blob 存储删除",
                class_id,
                report.blob_failures.len()
            );
        }

        Ok(report)
    }

    /// 删除单个作业及其全部提交和音频
    ///
    /// 仅作业属主教师可调用；不涉及费用记录。
    pub async fn delete_homework(
        &self,
        homework_id: i64,
        requester_id: i64,
    ) -> Result<CascadeReport> {
        let homework = self
            .storage
            .get_homework_by_id(homework_id)
            .await?
            .ok_or_else(|| LMSystemError::not_found(format!("作业不存在: {homework_id}")))?;

        if homework.teacher_id != requester_id {
            return Err(LMSystemError::authorization(
                "只有作业所属教师可以删除作业",
            ));
        }

        let mut report = CascadeReport::default();
        self.delete_homework_tree(&homework, &mut report).await?;

        if !report.blob_failures.is_empty() {
            warn!(
                "作业 {} 删除完成，但有 {} 个音频未能从 Blob 存储删除",
                homework_id,
                report.blob_failures.len()
            );
        }

        Ok(report)
    }

    /// 删除一个作业的子树：提交音频 → 提交记录 → 示范音频 → 作业记录
    async fn delete_homework_tree(
        &self,
        homework: &Homework,
        report: &mut CascadeReport,
    ) -> Result<()> {
        let submissions = self
            .storage
            .list_submissions_by_homework(homework.id)
            .await?;

        for submission in &submissions {
            if let Some(audio_id) = &submission.audio_id {
                self.try_delete_blob(audio_id, report).await;
            }
        }

        report.submissions_deleted += self
            .storage
            .delete_submissions_by_homework(homework.id)
            .await?;

        if let Some(audio_id) = &homework.reference_audio_id {
            self.try_delete_blob(audio_id, report).await;
        }

        self.storage.delete_homework(homework.id).await?;
        report.homeworks_deleted += 1;

        Ok(())
    }

    /// 尽力删除一个 Blob；失败记日志并继续
    async fn try_delete_blob(&self, blob_id: &str, report: &mut CascadeReport) {
        if let Err(e) = self.blobs.delete(blob_id).await {
            error!("级联删除音频失败 (blob {}): {}", blob_id, e);
            report.blob_failures.push(BlobFailure {
                blob_id: blob_id.to_string(),
                error: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::models::fees::entities::FeeFrequency;
    use crate::models::fees::requests::{RecordPaymentRequest, SetClassFeeRequest};
    use crate::models::homeworks::requests::NewHomework;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::{MemoryBlobStore, MemoryStorage};

    struct Fixture {
        storage: Arc<MemoryStorage>,
        blobs: Arc<MemoryBlobStore>,
        manager: CascadeManager,
        teacher_id: i64,
        student_id: i64,
        class_id: i64,
    }

    async fn fixture() -> Fixture {
        let storage = Arc::new(MemoryStorage::new());
        let blobs = Arc::new(MemoryBlobStore::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let student = storage.seed_user("student1", UserRole::Student).await;
        let class = storage
            .create_class(
                teacher.id,
                CreateClassRequest {
                    title: "Violin 101".to_string(),
                    description: None,
                    url: None,
                    start_date: "2025-09-01".to_string(),
                    end_date: "2026-01-31".to_string(),
                    schedule: None,
                    fee: None,
                },
            )
            .await
            .unwrap();

        let manager = CascadeManager::new(storage.clone(), blobs.clone());
        Fixture {
            storage,
            blobs,
            manager,
            teacher_id: teacher.id,
            student_id: student.id,
            class_id: class.id,
        }
    }

    async fn add_homework(f: &Fixture, with_reference_audio: bool) -> i64 {
        let reference_audio_id = if with_reference_audio {
            Some(
                f.blobs
                    .put("ref.mp3", "audio/mpeg", f.teacher_id, b"reference")
                    .await
                    .unwrap(),
            )
        } else {
            None
        };
        f.storage
            .create_homework(
                f.teacher_id,
                NewHomework {
                    class_id: f.class_id,
                    title: "Etude No. 1".to_string(),
                    description: None,
                    due_date: chrono::Utc::now(),
                    reference_audio_id,
                },
            )
            .await
            .unwrap()
            .id
    }

    async fn add_submission(f: &Fixture, homework_id: i64) -> (i64, String) {
        let audio_id = f
            .blobs
            .put("answer.mp3", "audio/mpeg", f.student_id, b"answer")
            .await
            .unwrap();
        let submission = f
            .storage
            .create_submission(homework_id, f.student_id, Some(audio_id.clone()))
            .await
            .unwrap();
        (submission.id, audio_id)
    }

    #[tokio::test]
    async fn test_delete_class_removes_every_descendant() {
        let f = fixture().await;
        let hw1 = add_homework(&f, true).await;
        let hw2 = add_homework(&f, false).await;
        add_submission(&f, hw1).await;
        add_submission(&f, hw1).await;
        add_submission(&f, hw2).await;
        f.storage.enroll_student(f.class_id, f.student_id).await.unwrap();
        f.storage
            .create_fee(
                f.student_id,
                RecordPaymentRequest {
                    class_id: f.class_id,
                    amount_paid: 40.0,
                    description: None,
                },
            )
            .await
            .unwrap();
        f.storage
            .upsert_class_fee(
                f.teacher_id,
                SetClassFeeRequest {
                    class_id: f.class_id,
                    amount: 100.0,
                    frequency: FeeFrequency::Monthly,
                },
            )
            .await
            .unwrap();

        let report = f
            .manager
            .delete_class(f.class_id, f.teacher_id)
            .await
            .unwrap();

        assert_eq!(report.homeworks_deleted, 2);
        assert_eq!(report.submissions_deleted, 3);
        assert_eq!(report.fees_deleted, 1);
        assert!(report.class_fee_deleted);
        assert_eq!(report.students_removed, 1);
        assert!(report.blob_failures.is_empty());

        // 实体存储里不再有任何引用该班级的记录
        assert!(f.storage.get_class_by_id(f.class_id).await.unwrap().is_none());
        assert!(f.storage.list_homeworks_by_class(f.class_id).await.unwrap().is_empty());
        assert!(f.storage.list_submissions_by_homework(hw1).await.unwrap().is_empty());
        assert!(f.storage.list_submissions_by_homework(hw2).await.unwrap().is_empty());
        assert!(f.storage.list_fees_by_class(f.class_id).await.unwrap().is_empty());
        assert!(f.storage.get_class_fee_by_class(f.class_id).await.unwrap().is_none());
        assert!(f.storage.list_class_students(f.class_id).await.unwrap().is_empty());

        // 音频也全部清掉
        assert_eq!(f.blobs.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_class_requires_owner() {
        let f = fixture().await;
        let other = f.storage.seed_user("teacher2", UserRole::Teacher).await;
        add_homework(&f, true).await;

        let err = f.manager.delete_class(f.class_id, other.id).await.unwrap_err();
        assert!(matches!(err, LMSystemError::Authorization(_)));

        // 授权失败时什么都没删
        assert!(f.storage.get_class_by_id(f.class_id).await.unwrap().is_some());
        assert_eq!(f.storage.list_homeworks_by_class(f.class_id).await.unwrap().len(), 1);
        assert_eq!(f.blobs.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_class_not_found() {
        let f = fixture().await;
        let err = f.manager.delete_class(99999, f.teacher_id).await.unwrap_err();
        assert!(matches!(err, LMSystemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blob_failure_does_not_block_metadata_cleanup() {
        let f = fixture().await;
        let hw = add_homework(&f, false).await;
        let (_, audio1) = add_submission(&f, hw).await;
        let (_, audio2) = add_submission(&f, hw).await;

        // 模拟其中一个 Blob 删不掉
        f.blobs.fail_delete_on(&audio1);

        let report = f.manager.delete_homework(hw, f.teacher_id).await.unwrap();

        assert_eq!(report.homeworks_deleted, 1);
        assert_eq!(report.submissions_deleted, 2);
        assert_eq!(report.blob_failures.len(), 1);
        assert_eq!(report.blob_failures[0].blob_id, audio1);

        // 元数据照样删干净
        assert!(f.storage.get_homework_by_id(hw).await.unwrap().is_none());
        assert!(f.storage.list_submissions_by_homework(hw).await.unwrap().is_empty());
        // 没注入失败的那个音频已删除
        assert!(!f.blobs.contains(&audio2));
    }

    #[tokio::test]
    async fn test_delete_homework_scoped_to_one_homework() {
        let f = fixture().await;
        let hw1 = add_homework(&f, true).await;
        let hw2 = add_homework(&f, true).await;
        add_submission(&f, hw1).await;
        f.storage
            .create_fee(
                f.student_id,
                RecordPaymentRequest {
                    class_id: f.class_id,
                    amount_paid: 50.0,
                    description: None,
                },
            )
            .await
            .unwrap();

        let report = f.manager.delete_homework(hw1, f.teacher_id).await.unwrap();
        assert_eq!(report.homeworks_deleted, 1);
        assert_eq!(report.submissions_deleted, 1);

        // 另一个作业和费用记录不受影响
        assert!(f.storage.get_homework_by_id(hw2).await.unwrap().is_some());
        assert_eq!(f.storage.list_fees_by_class(f.class_id).await.unwrap().len(), 1);
        // hw2 的示范音频还在
        assert_eq!(f.blobs.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_homework_requires_owner() {
        let f = fixture().await;
        let hw = add_homework(&f, false).await;
        let err = f
            .manager
            .delete_homework(hw, f.student_id)
            .await
            .unwrap_err();
        assert!(matches!(err, LMSystemError::Authorization(_)));
        assert!(f.storage.get_homework_by_id(hw).await.unwrap().is_some());
    }
}
