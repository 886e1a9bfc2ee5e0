pub mod create;
pub mod delete;
pub mod detail;
pub mod enroll;
pub mod list;
pub mod overview;
pub mod roster;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    ClassQueryParams, CreateClassRequest, EnrollClassRequest, UpdateClassRequest,
};
use crate::storage::Storage;
use crate::storage::blob::BlobStore;

pub use overview::ClassViewBuilder;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建班级
    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    // 班级列表（含学生视角的报名/缴费/作业完成标记）
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    // 当前学生已报名的班级
    pub async fn list_enrolled_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_enrolled_classes(self, request, query).await
    }

    // 当前教师开设的班级
    pub async fn list_taught_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_taught_classes(self, request, query).await
    }

    // 班级详情
    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        detail::get_class(self, req, class_id).await
    }

    // 更新班级信息
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    // 删除班级（级联删除全部作业/提交/音频/费用）
    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, class_id).await
    }

    // 学生报名
    pub async fn enroll(
        &self,
        req: &HttpRequest,
        enroll_data: EnrollClassRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, req, enroll_data).await
    }

    // 班级名册
    pub async fn list_roster(
        &self,
        req: &HttpRequest,
        class_id: i64,
        search: Option<String>,
    ) -> ActixResult<HttpResponse> {
        roster::list_roster(self, req, class_id, search).await
    }
}
