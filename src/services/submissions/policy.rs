//! 提交策略
//!
//! 上传时按固定顺序执行检查：次数上限 → 声明类型 → 大小。
//! 任何一步失败都发生在写入之前，不会留下半成品记录或孤儿音频。
//! 次数检查是先读后写，同一学生并发提交时可能超限，目前不加锁。

use std::sync::Arc;

use crate::errors::{LMSystemError, Result};
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;
use crate::storage::blob::BlobStore;
use crate::utils::UploadedAudio;

/// 每个学生对同一作业的提交上限
pub const MAX_SUBMISSIONS_PER_HOMEWORK: i64 = 3;

/// 单个音频文件大小上限：10 MiB
pub const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

pub struct SubmissionPolicy {
    storage: Arc<dyn Storage>,
    blobs: Arc<dyn BlobStore>,
}

impl SubmissionPolicy {
    pub fn new(storage: Arc<dyn Storage>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { storage, blobs }
    }

    /// 校验声明的 MIME 类型和文件大小
    fn check_audio(file: &UploadedAudio) -> Result<()> {
        if !file.content_type.starts_with("audio/") {
            return Err(LMSystemError::unsupported_media_type(
                "Only audio files are allowed",
            ));
        }
        if file.data.len() > MAX_AUDIO_BYTES {
            return Err(LMSystemError::payload_too_large("File size exceeds 10MB"));
        }
        Ok(())
    }

    /// 学生提交作业
    ///
    /// 不带附件的提交是合法的（audio_id 留空）。附件先过检查、
    /// 写入 Blob 存储，拿到 ID 后才建提交记录。
    pub async fn submit(
        &self,
        homework_id: i64,
        student_id: i64,
        file: Option<&UploadedAudio>,
    ) -> Result<Submission> {
        let count = self
            .storage
            .count_submissions(homework_id, student_id)
            .await?;
        if count >= MAX_SUBMISSIONS_PER_HOMEWORK {
            return Err(LMSystemError::submission_limit(
                "Maximum 3 submissions allowed per homework",
            ));
        }

        let audio_id = match file {
            Some(file) => {
                Self::check_audio(file)?;
                Some(
                    self.blobs
                        .put(&file.file_name, &file.content_type, student_id, &file.data)
                        .await?,
                )
            }
            None => None,
        };

        self.storage
            .create_submission(homework_id, student_id, audio_id)
            .await
    }

    /// 教师上传示范音频
    ///
    /// 走与学生提交相同的类型/大小检查，没有次数限制。
    pub async fn store_reference_audio(
        &self,
        teacher_id: i64,
        file: &UploadedAudio,
    ) -> Result<String> {
        Self::check_audio(file)?;
        self.blobs
            .put(&file.file_name, &file.content_type, teacher_id, &file.data)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{MemoryBlobStore, MemoryStorage};

    fn audio(name: &str, content_type: &str, data: Vec<u8>) -> UploadedAudio {
        UploadedAudio {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            data,
        }
    }

    fn policy() -> (Arc<MemoryStorage>, Arc<MemoryBlobStore>, SubmissionPolicy) {
        let storage = Arc::new(MemoryStorage::new());
        let blobs = Arc::new(MemoryBlobStore::new());
        let policy = SubmissionPolicy::new(storage.clone(), blobs.clone());
        (storage, blobs, policy)
    }

    #[tokio::test]
    async fn test_submit_with_audio_stores_blob() {
        let (_storage, blobs, policy) = policy();
        let file = audio("etude.mp3", "audio/mpeg", vec![1, 2, 3]);

        let submission = policy.submit(10, 20, Some(&file)).await.unwrap();
        let audio_id = submission.audio_id.expect("audio id should be set");

        let stored = blobs.get(&audio_id).await.unwrap().expect("blob exists");
        assert_eq!(stored.file_name, "etude.mp3");
        assert_eq!(stored.content_type, "audio/mpeg");
        // 上传者标签记录的是提交学生
        assert_eq!(stored.uploaded_by, 20);
    }

    #[tokio::test]
    async fn test_submit_without_audio_is_legal() {
        let (storage, blobs, policy) = policy();
        let submission = policy.submit(10, 20, None).await.unwrap();
        assert!(submission.audio_id.is_none());
        assert_eq!(blobs.len(), 0);
        assert_eq!(storage.count_submissions(10, 20).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fourth_submission_rejected_without_side_effects() {
        let (storage, blobs, policy) = policy();
        for _ in 0..3 {
            policy.submit(10, 20, None).await.unwrap();
        }

        let file = audio("late.mp3", "audio/mpeg", vec![1]);
        let err = policy.submit(10, 20, Some(&file)).await.unwrap_err();
        assert!(matches!(err, LMSystemError::SubmissionLimit(_)));

        // 既没有新记录，也没有写入任何音频
        assert_eq!(storage.count_submissions(10, 20).await.unwrap(), 3);
        assert_eq!(blobs.len(), 0);
    }

    #[tokio::test]
    async fn test_limit_is_per_homework_and_student() {
        let (_storage, _blobs, policy) = policy();
        for _ in 0..3 {
            policy.submit(10, 20, None).await.unwrap();
        }
        // 其他作业、其他学生不受影响
        assert!(policy.submit(11, 20, None).await.is_ok());
        assert!(policy.submit(10, 21, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_audio_media_type_rejected_before_any_write() {
        let (storage, blobs, policy) = policy();
        let file = audio("cover.png", "image/png", vec![0x89, 0x50]);

        let err = policy.submit(10, 20, Some(&file)).await.unwrap_err();
        assert!(matches!(err, LMSystemError::UnsupportedMediaType(_)));
        assert_eq!(storage.count_submissions(10, 20).await.unwrap(), 0);
        assert_eq!(blobs.len(), 0);

        let err = policy.store_reference_audio(1, &file).await.unwrap_err();
        assert!(matches!(err, LMSystemError::UnsupportedMediaType(_)));
        assert_eq!(blobs.len(), 0);
    }

    #[tokio::test]
    async fn test_oversized_audio_rejected() {
        let (storage, blobs, policy) = policy();
        let file = audio("big.wav", "audio/wav", vec![0; MAX_AUDIO_BYTES + 1]);

        let err = policy.submit(10, 20, Some(&file)).await.unwrap_err();
        assert!(matches!(err, LMSystemError::PayloadTooLarge(_)));
        assert_eq!(storage.count_submissions(10, 20).await.unwrap(), 0);
        assert_eq!(blobs.len(), 0);

        // 恰好 10 MiB 是允许的
        let file = audio("exact.wav", "audio/wav", vec![0; MAX_AUDIO_BYTES]);
        assert!(policy.store_reference_audio(1, &file).await.is_ok());
    }

    #[tokio::test]
    async fn test_reference_audio_has_no_count_limit() {
        let (_storage, blobs, policy) = policy();
        for i in 0..5u8 {
            let file = audio(&format!("ref{i}.mp3"), "audio/mpeg", vec![i]);
            policy.store_reference_audio(1, &file).await.unwrap();
        }
        assert_eq!(blobs.len(), 5);
    }
}
