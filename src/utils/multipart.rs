//! Multipart 表单读取
//!
//! 作业创建和作业提交都是「若干文本字段 + 至多一个音频文件」的
//! multipart 表单，这里统一解析；类型和大小校验在提交策略层做。

use std::collections::BTreeMap;

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::errors::{LMSystemError, Result};

/// 已读入内存的上传音频
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    // 原始文件名
    pub file_name: String,
    // 客户端声明的 MIME 类型
    pub content_type: String,
    pub data: Vec<u8>,
}

/// 解析后的表单：文本字段 + 可选的单个文件
#[derive(Debug, Default)]
pub struct AudioForm {
    pub fields: BTreeMap<String, String>,
    pub file: Option<UploadedAudio>,
}

impl AudioForm {
    /// 取必填文本字段
    pub fn required(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| LMSystemError::validation(format!("缺少表单字段: {name}")))
    }

    /// 取可选文本字段
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|s| !s.trim().is_empty())
            .cloned()
    }
}

/// 读取 multipart 表单
///
/// 文件内容最多保留 `max_file_bytes + 1` 字节：超限的上传仍会被
/// 完整读掉（否则 multipart 流无法推进到后续字段），但多余内容
/// 直接丢弃，data 长度超过 max_file_bytes 即说明超限。
pub async fn read_audio_form(mut payload: Multipart, max_file_bytes: usize) -> Result<AudioForm> {
    let mut form = AudioForm::default();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            let file_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 没有文件名的空文件控件当作未上传
            if file_name.is_empty() {
                while field.next().await.is_some() {}
                continue;
            }

            if form.file.is_some() {
                return Err(LMSystemError::validation(
                    "Only one file can be uploaded at a time",
                ));
            }

            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            let mut data: Vec<u8> = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| {
                    LMSystemError::validation(format!("Multipart stream error: {e}"))
                })?;
                let room = (max_file_bytes + 1).saturating_sub(data.len());
                if room > 0 {
                    data.extend_from_slice(&chunk[..chunk.len().min(room)]);
                }
            }

            form.file = Some(UploadedAudio {
                file_name,
                content_type,
                data,
            });
        } else if !name.is_empty() {
            let mut value: Vec<u8> = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| {
                    LMSystemError::validation(format!("Multipart stream error: {e}"))
                })?;
                value.extend_from_slice(&chunk);
            }
            let value = String::from_utf8(value)
                .map_err(|_| LMSystemError::validation(format!("表单字段不是合法 UTF-8: {name}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
