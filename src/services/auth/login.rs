use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AuthService;
use crate::config::AppConfig;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

pub async fn login(
    service: &AuthService,
    request: &HttpRequest,
    login_data: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage
        .get_user_by_username_or_email(&login_data.identifier)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            // 不区分"用户不存在"和"密码错误"
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::InvalidCredentials,
                "Invalid username or password",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    if !verify_password(&login_data.password, &user.password_hash) {
        warn!("Failed login attempt for user {}", user.username);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::InvalidCredentials,
            "Invalid username or password",
        )));
    }

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::UserInactive,
            "User account is not active",
        )));
    }

    let _ = storage.update_last_login(user.id).await;

    // remember_me 使用更长的刷新令牌有效期
    let refresh_expiry = if login_data.remember_me {
        Some(chrono::Duration::days(
            AppConfig::get().jwt.refresh_token_remember_me_expiry,
        ))
    } else {
        None
    };

    let token_pair = match user.generate_token_pair(refresh_expiry) {
        Ok(pair) => pair,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to generate tokens: {e}"),
                )),
            );
        }
    };

    info!("User logged in: {} (ID: {})", user.username, user.id);

    let cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            user,
            access_token: token_pair.access_token,
        },
        "Logged in successfully",
    )))
}
