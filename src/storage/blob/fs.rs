//! 文件系统 Blob 存储实现
//!
//! 每个 Blob 两个文件：`{id}.bin` 存内容，`{id}.json` 存元数据。

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BlobStore, StoredBlob};
use crate::errors::{LMSystemError, Result};

/// Blob 元数据 sidecar
#[derive(Debug, Serialize, Deserialize)]
struct BlobMeta {
    file_name: String,
    content_type: String,
    uploaded_by: i64,
    uploaded_at: i64,
}

pub struct FsBlobStore {
    dir: PathBuf,
}

impl FsBlobStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| LMSystemError::blob_operation(format!("创建 Blob 目录失败: {e}")))?;
        }
        Ok(Self { dir })
    }

    // Blob ID 只含时间戳、UUID 和连字符；其余一律视为非法，
    // 同时挡掉路径穿越
    fn is_valid_id(blob_id: &str) -> bool {
        !blob_id.is_empty()
            && blob_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    fn data_path(&self, blob_id: &str) -> PathBuf {
        self.dir.join(format!("{blob_id}.bin"))
    }

    fn meta_path(&self, blob_id: &str) -> PathBuf {
        self.dir.join(format!("{blob_id}.json"))
    }
}

#[async_trait::async_trait]
impl BlobStore for FsBlobStore {
    async fn put(
        &self,
        file_name: &str,
        content_type: &str,
        uploaded_by: i64,
        data: &[u8],
    ) -> Result<String> {
        let blob_id = format!("{}-{}", chrono::Utc::now().timestamp_millis(), Uuid::new_v4());

        let data_path = self.data_path(&blob_id);
        let mut f = fs::File::create(&data_path)
            .map_err(|e| LMSystemError::blob_operation(format!("创建 Blob 文件失败: {e}")))?;
        if let Err(e) = f.write_all(data) {
            let _ = fs::remove_file(&data_path);
            return Err(LMSystemError::blob_operation(format!(
                "写入 Blob 内容失败: {e}"
            )));
        }

        let meta = BlobMeta {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            uploaded_by,
            uploaded_at: chrono::Utc::now().timestamp(),
        };
        let meta_json = serde_json::to_string(&meta)
            .map_err(|e| LMSystemError::serialization(format!("序列化 Blob 元数据失败: {e}")))?;
        if let Err(e) = fs::write(self.meta_path(&blob_id), meta_json) {
            // 元数据写不进去就当整体失败，清掉已落盘的内容
            let _ = fs::remove_file(&data_path);
            return Err(LMSystemError::blob_operation(format!(
                "写入 Blob 元数据失败: {e}"
            )));
        }

        Ok(blob_id)
    }

    async fn get(&self, blob_id: &str) -> Result<Option<StoredBlob>> {
        if !Self::is_valid_id(blob_id) {
            return Ok(None);
        }

        let meta_json = match fs::read_to_string(self.meta_path(blob_id)) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LMSystemError::blob_operation(format!(
                    "读取 Blob 元数据失败: {e}"
                )));
            }
        };
        let meta: BlobMeta = serde_json::from_str(&meta_json)
            .map_err(|e| LMSystemError::serialization(format!("解析 Blob 元数据失败: {e}")))?;

        let data = match fs::read(self.data_path(blob_id)) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LMSystemError::blob_operation(format!(
                    "读取 Blob 内容失败: {e}"
                )));
            }
        };

        Ok(Some(StoredBlob {
            file_name: meta.file_name,
            content_type: meta.content_type,
            uploaded_by: meta.uploaded_by,
            data,
        }))
    }

    async fn delete(&self, blob_id: &str) -> Result<()> {
        if !Self::is_valid_id(blob_id) {
            return Err(LMSystemError::blob_operation(format!(
                "非法的 Blob ID: {blob_id}"
            )));
        }

        fs::remove_file(self.data_path(blob_id))
            .map_err(|e| LMSystemError::blob_operation(format!("删除 Blob 内容失败: {e}")))?;
        // 内容已删掉，元数据残留只浪费空间，不影响正确性
        let _ = fs::remove_file(self.meta_path(blob_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsBlobStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FsBlobStore::new(dir.path()).expect("Failed to create blob store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let (_dir, store) = store();
        let id = store
            .put("song.mp3", "audio/mpeg", 7, b"abc123")
            .await
            .unwrap();

        let blob = store.get(&id).await.unwrap().expect("blob should exist");
        assert_eq!(blob.file_name, "song.mp3");
        assert_eq!(blob.content_type, "audio/mpeg");
        assert_eq!(blob.uploaded_by, 7);
        assert_eq!(blob.data, b"abc123");
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let (_dir, store) = store();
        assert!(store.get("1700000000000-deadbeef").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_none() {
        let (_dir, store) = store();
        assert!(store.get("../etc/passwd").await.unwrap().is_none());
        assert!(store.get("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_blob() {
        let (_dir, store) = store();
        let id = store.put("a.wav", "audio/wav", 1, b"x").await.unwrap();
        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_errors() {
        let (_dir, store) = store();
        assert!(store.delete("1700000000000-cafebabe").await.is_err());
    }
}
