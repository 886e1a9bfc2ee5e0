use std::sync::Arc;

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

use crate::errors::Result;

pub mod blob;
pub mod sea_orm_storage;

#[cfg(test)]
pub(crate) mod memory;

/// 实体存储接口
///
/// 每个方法都是单记录粒度的原子操作；跨实体的删除编排
/// 只允许经由 `services::cascade::CascadeManager`，其余路径
/// 不得直接删除班级或作业。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新用户资料
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 分页列出班级（支持按教师/学生/标题描述筛选）
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<(Vec<Class>, PaginationInfo)>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级记录（单记录，仅级联管理器调用）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级学生管理方法
    // 学生报名；已在班级中时返回 false，不产生重复记录
    async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<bool>;
    // 学生是否已在班级中
    async fn is_student_enrolled(&self, class_id: i64, student_id: i64) -> Result<bool>;
    // 班级名册，按加入顺序
    async fn list_class_students(&self, class_id: i64) -> Result<Vec<ClassStudent>>;
    // 删除班级全部成员关系（仅级联管理器调用）
    async fn delete_class_students_by_class(&self, class_id: i64) -> Result<u64>;

    /// 作业管理方法
    // 创建作业
    async fn create_homework(&self, teacher_id: i64, homework: NewHomework) -> Result<Homework>;
    // 通过ID获取作业信息
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    // 分页列出班级作业
    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<(Vec<Homework>, PaginationInfo)>;
    // 枚举班级全部作业（级联删除用）
    async fn list_homeworks_by_class(&self, class_id: i64) -> Result<Vec<Homework>>;
    // 班级全部作业 ID
    async fn list_homework_ids_by_class(&self, class_id: i64) -> Result<Vec<i64>>;
    // 删除作业记录（单记录，仅级联管理器调用）
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 创建提交
    async fn create_submission(
        &self,
        homework_id: i64,
        student_id: i64,
        audio_id: Option<String>,
    ) -> Result<Submission>;
    // 通过ID获取提交信息
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 某作业的全部提交
    async fn list_submissions_by_homework(&self, homework_id: i64) -> Result<Vec<Submission>>;
    // 某学生对某作业的提交历史
    async fn list_submissions_by_homework_and_student(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>>;
    // 某学生对某作业的提交次数
    async fn count_submissions(&self, homework_id: i64, student_id: i64) -> Result<i64>;
    // 评分
    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;
    // 删除某作业的全部提交（仅级联管理器调用）
    async fn delete_submissions_by_homework(&self, homework_id: i64) -> Result<u64>;
    // 给定作业集合中，某学生至少提交过一次的作业 ID（去重）
    async fn list_submitted_homework_ids(
        &self,
        student_id: i64,
        homework_ids: &[i64],
    ) -> Result<Vec<i64>>;

    /// 费用管理方法
    // 记录缴费
    async fn create_fee(&self, student_id: i64, payment: RecordPaymentRequest) -> Result<Fee>;
    // 班级全部缴费记录
    async fn list_fees_by_class(&self, class_id: i64) -> Result<Vec<Fee>>;
    // 某学生在某班级的缴费记录
    async fn list_fees_by_class_and_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<Fee>>;
    // 某学生在某班级是否有任一缴费记录
    async fn has_fee_record(&self, class_id: i64, student_id: i64) -> Result<bool>;
    // 删除班级全部缴费记录（仅级联管理器调用）
    async fn delete_fees_by_class(&self, class_id: i64) -> Result<u64>;
    // 设置班级收费标准；已存在时原地更新金额和周期
    async fn upsert_class_fee(&self, teacher_id: i64, fee: SetClassFeeRequest) -> Result<ClassFee>;
    // 查询班级收费标准
    async fn get_class_fee_by_class(&self, class_id: i64) -> Result<Option<ClassFee>>;
    // 删除班级收费标准（仅级联管理器调用）
    async fn delete_class_fee_by_class(&self, class_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
