//! 音频 Blob 存储
//!
//! 音频内容存放在实体存储之外，按 ID 寻址。实例在进程启动时
//! 构造一次并注入到需要它的组件，不使用全局惰性句柄。

mod fs;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;

pub use fs::FsBlobStore;

/// 已存储的 Blob 及其元数据
#[derive(Debug, Clone)]
pub struct StoredBlob {
    // 上传时的原始文件名
    pub file_name: String,
    pub content_type: String,
    // 上传者用户 ID
    pub uploaded_by: i64,
    pub data: Vec<u8>,
}

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// 写入音频，返回生成的 Blob ID
    ///
    /// ID 带创建时间前缀，防止并发上传同名文件冲突。
    async fn put(
        &self,
        file_name: &str,
        content_type: &str,
        uploaded_by: i64,
        data: &[u8],
    ) -> Result<String>;

    /// 读取音频及元数据；ID 非法或不存在时返回 None
    async fn get(&self, blob_id: &str) -> Result<Option<StoredBlob>>;

    /// 删除音频
    ///
    /// ID 不存在时返回错误；级联删除场景由调用方记录并忽略。
    async fn delete(&self, blob_id: &str) -> Result<()>;
}

pub async fn create_blob_store() -> Result<Arc<dyn BlobStore>> {
    let config = AppConfig::get();
    let store = FsBlobStore::new(&config.blobs.dir)?;
    Ok(Arc::new(store))
}
