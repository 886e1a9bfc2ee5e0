use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

pub async fn logout(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 失效中间件缓存的 token → 用户映射
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
    {
        let cache = service.get_cache(request);
        cache.remove(&format!("user:{token}")).await;
    }

    // 清掉刷新令牌 Cookie
    let cookie = JwtUtils::create_empty_refresh_token_cookie();
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success_empty("Logged out successfully")))
}
