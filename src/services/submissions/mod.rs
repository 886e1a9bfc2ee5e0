pub mod create;
pub mod grade;
pub mod list;
pub mod policy;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::storage::Storage;
use crate::storage::blob::BlobStore;

pub use policy::SubmissionPolicy;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    /// 提交作业（multipart，可附带音频）
    pub async fn submit_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        payload: actix_multipart::Multipart,
    ) -> ActixResult<HttpResponse> {
        create::submit_homework(self, request, homework_id, payload).await
    }

    /// 某作业的全部提交（教师视角，带学生信息）
    pub async fn list_submissions_for_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions_for_homework(self, request, homework_id).await
    }

    /// 当前学生对某作业的提交历史
    pub async fn list_my_submissions(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_my_submissions(self, request, homework_id).await
    }

    /// 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        grade_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, grade_data).await
    }
}
