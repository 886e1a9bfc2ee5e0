//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod class_students;
mod classes;
mod fees;
mod homeworks;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{LMSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginationInfo,
    class_students::entities::ClassStudent,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    },
    fees::{
        entities::{ClassFee, Fee},
        requests::{RecordPaymentRequest, SetClassFeeRequest},
    },
    homeworks::{
        entities::Homework,
        requests::{HomeworkListQuery, NewHomework},
    },
    submissions::entities::Submission,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(teacher_id, class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<(Vec<Class>, PaginationInfo)> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 班级学生模块
    async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.enroll_student_impl(class_id, student_id).await
    }

    async fn is_student_enrolled(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.is_student_enrolled_impl(class_id, student_id).await
    }

    async fn list_class_students(&self, class_id: i64) -> Result<Vec<ClassStudent>> {
        self.list_class_students_impl(class_id).await
    }

    async fn delete_class_students_by_class(&self, class_id: i64) -> Result<u64> {
        self.delete_class_students_by_class_impl(class_id).await
    }

    // 作业模块
    async fn create_homework(&self, teacher_id: i64, homework: NewHomework) -> Result<Homework> {
        self.create_homework_impl(teacher_id, homework).await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<(Vec<Homework>, PaginationInfo)> {
        self.list_homeworks_with_pagination_impl(query).await
    }

    async fn list_homeworks_by_class(&self, class_id: i64) -> Result<Vec<Homework>> {
        self.list_homeworks_by_class_impl(class_id).await
    }

    async fn list_homework_ids_by_class(&self, class_id: i64) -> Result<Vec<i64>> {
        self.list_homework_ids_by_class_impl(class_id).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        homework_id: i64,
        student_id: i64,
        audio_id: Option<String>,
    ) -> Result<Submission> {
        self.create_submission_impl(homework_id, student_id, audio_id)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions_by_homework(&self, homework_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_homework_impl(homework_id).await
    }

    async fn list_submissions_by_homework_and_student(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_homework_and_student_impl(homework_id, student_id)
            .await
    }

    async fn count_submissions(&self, homework_id: i64, student_id: i64) -> Result<i64> {
        self.count_submissions_impl(homework_id, student_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grade, feedback)
            .await
    }

    async fn delete_submissions_by_homework(&self, homework_id: i64) -> Result<u64> {
        self.delete_submissions_by_homework_impl(homework_id).await
    }

    async fn list_submitted_homework_ids(
        &self,
        student_id: i64,
        homework_ids: &[i64],
    ) -> Result<Vec<i64>> {
        self.list_submitted_homework_ids_impl(student_id, homework_ids)
            .await
    }

    // 费用模块
    async fn create_fee(&self, student_id: i64, payment: RecordPaymentRequest) -> Result<Fee> {
        self.create_fee_impl(student_id, payment).await
    }

    async fn list_fees_by_class(&self, class_id: i64) -> Result<Vec<Fee>> {
        self.list_fees_by_class_impl(class_id).await
    }

    async fn list_fees_by_class_and_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<Fee>> {
        self.list_fees_by_class_and_student_impl(class_id, student_id)
            .await
    }

    async fn has_fee_record(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.has_fee_record_impl(class_id, student_id).await
    }

    async fn delete_fees_by_class(&self, class_id: i64) -> Result<u64> {
        self.delete_fees_by_class_impl(class_id).await
    }

    async fn upsert_class_fee(&self, teacher_id: i64, fee: SetClassFeeRequest) -> Result<ClassFee> {
        self.upsert_class_fee_impl(teacher_id, fee).await
    }

    async fn get_class_fee_by_class(&self, class_id: i64) -> Result<Option<ClassFee>> {
        self.get_class_fee_by_class_impl(class_id).await
    }

    async fn delete_class_fee_by_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_fee_by_class_impl(class_id).await
    }
}
