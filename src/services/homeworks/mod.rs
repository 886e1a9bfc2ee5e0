pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::requests::HomeworkQueryParams;
use crate::storage::Storage;
use crate::storage::blob::BlobStore;

pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_blobs(&self, request: &HttpRequest) -> Arc<dyn BlobStore> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn BlobStore>>>()
            .expect("Blob store not found in app data")
            .get_ref()
            .clone()
    }

    /// 创建作业（multipart，可附带示范音频）
    pub async fn create_homework(
        &self,
        request: &HttpRequest,
        payload: actix_multipart::Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_homework(self, request, payload).await
    }

    /// 班级作业列表，带当前用户是否已提交标记
    pub async fn list_class_homeworks(
        &self,
        request: &HttpRequest,
        class_id: i64,
        query: HomeworkQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_homeworks(self, request, class_id, query).await
    }

    /// 删除作业（级联删除提交和音频）
    pub async fn delete_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_homework(self, request, homework_id).await
    }
}
