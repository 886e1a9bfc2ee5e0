use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::models::auth::requests::RegisterRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

pub async fn register(
    service: &AuthService,
    request: &HttpRequest,
    register_data: RegisterRequest,
) -> ActixResult<HttpResponse> {
    // 字段校验
    if let Err(msg) = validate_username(&register_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Err(msg) = validate_email(&register_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Err(msg) = validate_password_simple(&register_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordTooWeak, msg)));
    }

    let storage = service.get_storage(request);

    // 用户名/邮箱唯一性
    match storage
        .get_user_by_username_or_email(&register_data.username)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username already taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check username: {e}"),
                )),
            );
        }
    }
    match storage.get_user_by_email(&register_data.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Email already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check email: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&register_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreateFailed,
                    "Failed to process password",
                )),
            );
        }
    };

    let user = match storage
        .create_user(CreateUserRequest {
            username: register_data.username,
            email: register_data.email,
            password_hash,
            role: register_data.role,
            profile_name: register_data.profile_name,
            avatar_url: None,
        })
        .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("User creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreateFailed,
                    format!("Failed to create user: {e}"),
                )),
            );
        }
    };

    info!("New user registered: {} (ID: {})", user.username, user.id);

    // 注册即登录
    let token_pair = match user.generate_token_pair(None) {
        Ok(pair) => pair,
        Err(e) => {
            error!("Token generation failed after registration: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to generate tokens",
                )),
            );
        }
    };

    let cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            user,
            access_token: token_pair.access_token,
        },
        "Registered successfully",
    )))
}
