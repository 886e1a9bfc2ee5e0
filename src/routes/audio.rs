use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AudioService;

// 懒加载的全局 AUDIO_SERVICE 实例
static AUDIO_SERVICE: Lazy<AudioService> = Lazy::new(AudioService::new_lazy);

// ID 非法或不存在都由 Blob 存储映射为 404
pub async fn download(req: HttpRequest, blob_id: web::Path<String>) -> ActixResult<HttpResponse> {
    AUDIO_SERVICE.download(&req, blob_id.into_inner()).await
}

// 配置路由
pub fn configure_audio_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/audio")
            .wrap(middlewares::RequireJWT)
            .wrap(middleware::Compress::default())
            .route("/{blob_id}", web::get().to(download)),
    );
}
