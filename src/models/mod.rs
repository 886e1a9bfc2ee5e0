pub mod auth;
pub mod class_students;
pub mod classes;
pub mod common;
pub mod error_code;
pub mod fees;
pub mod homeworks;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use error_code::ErrorCode;

// 程序启动时间，注入到 app_data 供运行状态查询使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
