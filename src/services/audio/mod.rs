pub mod download;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::blob::BlobStore;

pub struct AudioService;

impl AudioService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_blobs(&self, request: &HttpRequest) -> Arc<dyn BlobStore> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn BlobStore>>>()
            .expect("Blob store not found in app data")
            .get_ref()
            .clone()
    }

    /// 下载音频（附件形式，带原始文件名）
    pub async fn download(
        &self,
        request: &HttpRequest,
        blob_id: String,
    ) -> ActixResult<HttpResponse> {
        download::download(self, request, blob_id).await
    }
}
