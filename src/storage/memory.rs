//! 测试用内存存储
//!
//! HashMap 实现的 `Storage` / `BlobStore`，供级联删除、提交策略、
//! 费用台账等核心逻辑的单元测试使用；BlobStore 支持按 ID 注入
//! 删除失败，模拟 Blob 存储不可用。

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{LMSystemError, Result};
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
        entities::{User, UserProfile, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};
use crate::storage::Storage;
use crate::storage::blob::{BlobStore, StoredBlob};

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: BTreeMap<i64, User>,
    classes: BTreeMap<i64, Class>,
    class_students: Vec<ClassStudent>,
    homeworks: BTreeMap<i64, Homework>,
    submissions: BTreeMap<i64, Submission>,
    fees: Vec<Fee>,
    // class_id -> 收费标准
    class_fees: BTreeMap<i64, ClassFee>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub(crate) struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接塞入一个用户，省去注册流程
    pub async fn seed_user(&self, username: &str, role: UserRole) -> User {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let user = User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            profile: UserProfile {
                profile_name: None,
                avatar_url: None,
            },
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.values().any(|u| u.username == req.username) {
            return Err(LMSystemError::database_operation("用户名已存在"));
        }
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let user = User {
            id,
            username: req.username,
            email: req.email,
            password_hash: req.password_hash,
            role: req.role,
            status: UserStatus::Active,
            profile: UserProfile {
                profile_name: req.profile_name,
                avatar_url: req.avatar_url,
            },
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.inner.lock().unwrap().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned())
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(profile_name) = update.profile_name {
            user.profile.profile_name = Some(profile_name);
        }
        if let Some(avatar_url) = update.avatar_url {
            user.profile.avatar_url = Some(avatar_url);
        }
        user.updated_at = chrono::Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.get_mut(&id) {
            Some(user) => {
                user.last_login = Some(chrono::Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_class(&self, teacher_id: i64, req: CreateClassRequest) -> Result<Class> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let class = Class {
            id,
            title: req.title,
            description: req.description,
            url: req.url,
            teacher_id,
            schedule: req.schedule,
            start_date: req.start_date,
            end_date: req.end_date,
            fee: req.fee,
            created_at: now,
            updated_at: now,
        };
        inner.classes.insert(id, class.clone());
        Ok(class)
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        Ok(self.inner.lock().unwrap().classes.get(&class_id).cloned())
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<(Vec<Class>, PaginationInfo)> {
        let inner = self.inner.lock().unwrap();
        let enrolled: Option<HashSet<i64>> = query.student_id.map(|student_id| {
            inner
                .class_students
                .iter()
                .filter(|cs| cs.student_id == student_id)
                .map(|cs| cs.class_id)
                .collect()
        });
        let items: Vec<Class> = inner
            .classes
            .values()
            .filter(|c| query.teacher_id.is_none_or(|tid| c.teacher_id == tid))
            .filter(|c| enrolled.as_ref().is_none_or(|set| set.contains(&c.id)))
            .filter(|c| {
                query.search.as_deref().is_none_or(|q| {
                    c.title.contains(q)
                        || c.description.as_deref().is_some_and(|d| d.contains(q))
                })
            })
            .cloned()
            .collect();
        let total = items.len() as i64;
        Ok((
            items,
            PaginationInfo {
                page: 1,
                page_size: total.max(1),
                total,
                total_pages: 1,
            },
        ))
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(class) = inner.classes.get_mut(&class_id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            class.title = title;
        }
        if let Some(description) = update.description {
            class.description = Some(description);
        }
        if let Some(url) = update.url {
            class.url = Some(url);
        }
        class.updated_at = chrono::Utc::now();
        Ok(Some(class.clone()))
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .classes
            .remove(&class_id)
            .is_some())
    }

    async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .class_students
            .iter()
            .any(|cs| cs.class_id == class_id && cs.student_id == student_id)
        {
            return Ok(false);
        }
        let id = inner.next_id();
        inner.class_students.push(ClassStudent {
            id,
            class_id,
            student_id,
            joined_at: chrono::Utc::now(),
        });
        Ok(true)
    }

    async fn is_student_enrolled(&self, class_id: i64, student_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .class_students
            .iter()
            .any(|cs| cs.class_id == class_id && cs.student_id == student_id))
    }

    async fn list_class_students(&self, class_id: i64) -> Result<Vec<ClassStudent>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .class_students
            .iter()
            .filter(|cs| cs.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn delete_class_students_by_class(&self, class_id: i64) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.class_students.len();
        inner.class_students.retain(|cs| cs.class_id != class_id);
        Ok((before - inner.class_students.len()) as u64)
    }

    async fn create_homework(&self, teacher_id: i64, homework: NewHomework) -> Result<Homework> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let homework = Homework {
            id,
            class_id: homework.class_id,
            teacher_id,
            title: homework.title,
            description: homework.description,
            due_date: homework.due_date,
            reference_audio_id: homework.reference_audio_id,
            created_at: now,
            updated_at: now,
        };
        inner.homeworks.insert(id, homework.clone());
        Ok(homework)
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .homeworks
            .get(&homework_id)
            .cloned())
    }

    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<(Vec<Homework>, PaginationInfo)> {
        let inner = self.inner.lock().unwrap();
        let items: Vec<Homework> = inner
            .homeworks
            .values()
            .filter(|h| query.class_id.is_none_or(|cid| h.class_id == cid))
            .filter(|h| {
                query.search.as_deref().is_none_or(|q| {
                    h.title.contains(q)
                        || h.description.as_deref().is_some_and(|d| d.contains(q))
                })
            })
            .cloned()
            .collect();
        let total = items.len() as i64;
        Ok((
            items,
            PaginationInfo {
                page: 1,
                page_size: total.max(1),
                total,
                total_pages: 1,
            },
        ))
    }

    async fn list_homeworks_by_class(&self, class_id: i64) -> Result<Vec<Homework>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .homeworks
            .values()
            .filter(|h| h.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn list_homework_ids_by_class(&self, class_id: i64) -> Result<Vec<i64>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .homeworks
            .values()
            .filter(|h| h.class_id == class_id)
            .map(|h| h.id)
            .collect())
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .homeworks
            .remove(&homework_id)
            .is_some())
    }

    async fn create_submission(
        &self,
        homework_id: i64,
        student_id: i64,
        audio_id: Option<String>,
    ) -> Result<Submission> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let submission = Submission {
            id,
            homework_id,
            student_id,
            audio_id,
            grade: None,
            feedback: None,
            submitted_at: chrono::Utc::now(),
        };
        inner.submissions.insert(id, submission.clone());
        Ok(submission)
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .submissions
            .get(&submission_id)
            .cloned())
    }

    async fn list_submissions_by_homework(&self, homework_id: i64) -> Result<Vec<Submission>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .submissions
            .values()
            .filter(|s| s.homework_id == homework_id)
            .cloned()
            .collect())
    }

    async fn list_submissions_by_homework_and_student(
        &self,
        homework_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .submissions
            .values()
            .filter(|s| s.homework_id == homework_id && s.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn count_submissions(&self, homework_id: i64, student_id: i64) -> Result<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .submissions
            .values()
            .filter(|s| s.homework_id == homework_id && s.student_id == student_id)
            .count() as i64)
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(submission) = inner.submissions.get_mut(&submission_id) else {
            return Ok(None);
        };
        submission.grade = Some(grade);
        submission.feedback = feedback;
        Ok(Some(submission.clone()))
    }

    async fn delete_submissions_by_homework(&self, homework_id: i64) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let ids: Vec<i64> = inner
            .submissions
            .values()
            .filter(|s| s.homework_id == homework_id)
            .map(|s| s.id)
            .collect();
        for id in &ids {
            inner.submissions.remove(id);
        }
        Ok(ids.len() as u64)
    }

    async fn list_submitted_homework_ids(
        &self,
        student_id: i64,
        homework_ids: &[i64],
    ) -> Result<Vec<i64>> {
        let inner = self.inner.lock().unwrap();
        let mut ids: Vec<i64> = inner
            .submissions
            .values()
            .filter(|s| s.student_id == student_id && homework_ids.contains(&s.homework_id))
            .map(|s| s.homework_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn create_fee(&self, student_id: i64, payment: RecordPaymentRequest) -> Result<Fee> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let fee = Fee {
            id,
            class_id: payment.class_id,
            student_id,
            amount_paid: payment.amount_paid,
            description: payment.description,
            paid_by: student_id,
            paid_at: chrono::Utc::now(),
        };
        inner.fees.push(fee.clone());
        Ok(fee)
    }

    async fn list_fees_by_class(&self, class_id: i64) -> Result<Vec<Fee>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .fees
            .iter()
            .filter(|f| f.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn list_fees_by_class_and_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<Fee>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .fees
            .iter()
            .filter(|f| f.class_id == class_id && f.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn has_fee_record(&self, class_id: i64, student_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .fees
            .iter()
            .any(|f| f.class_id == class_id && f.student_id == student_id))
    }

    async fn delete_fees_by_class(&self, class_id: i64) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.fees.len();
        inner.fees.retain(|f| f.class_id != class_id);
        Ok((before - inner.fees.len()) as u64)
    }

    async fn upsert_class_fee(&self, teacher_id: i64, fee: SetClassFeeRequest) -> Result<ClassFee> {
        let mut inner = self.inner.lock().unwrap();
        let now = chrono::Utc::now();
        if let Some(existing) = inner.class_fees.get_mut(&fee.class_id) {
            existing.amount = fee.amount;
            existing.frequency = fee.frequency;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let id = inner.next_id();
        let class_fee = ClassFee {
            id,
            class_id: fee.class_id,
            teacher_id,
            amount: fee.amount,
            frequency: fee.frequency,
            created_at: now,
            updated_at: now,
        };
        inner.class_fees.insert(fee.class_id, class_fee.clone());
        Ok(class_fee)
    }

    async fn get_class_fee_by_class(&self, class_id: i64) -> Result<Option<ClassFee>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .class_fees
            .get(&class_id)
            .cloned())
    }

    async fn delete_class_fee_by_class(&self, class_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .class_fees
            .remove(&class_id)
            .is_some())
    }
}

/// 测试用内存 Blob 存储
#[derive(Default)]
pub(crate) struct MemoryBlobStore {
    blobs: Mutex<BTreeMap<String, StoredBlob>>,
    next_id: Mutex<i64>,
    // 注入删除失败的 Blob ID
    fail_deletes: Mutex<HashSet<String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 让后续对该 ID 的 delete 调用失败
    pub fn fail_delete_on(&self, blob_id: &str) {
        self.fail_deletes
            .lock()
            .unwrap()
            .insert(blob_id.to_string());
    }

    pub fn contains(&self, blob_id: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(blob_id)
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        file_name: &str,
        content_type: &str,
        uploaded_by: i64,
        data: &[u8],
    ) -> Result<String> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let blob_id = format!("blob-{}", *next_id);
        self.blobs.lock().unwrap().insert(
            blob_id.clone(),
            StoredBlob {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                uploaded_by,
                data: data.to_vec(),
            },
        );
        Ok(blob_id)
    }

    async fn get(&self, blob_id: &str) -> Result<Option<StoredBlob>> {
        Ok(self.blobs.lock().unwrap().get(blob_id).cloned())
    }

    async fn delete(&self, blob_id: &str) -> Result<()> {
        if self.fail_deletes.lock().unwrap().contains(blob_id) {
            return Err(LMSystemError::blob_operation(format!(
                "simulated failure deleting {blob_id}"
            )));
        }
        match self.blobs.lock().unwrap().remove(blob_id) {
            Some(_) => Ok(()),
            None => Err(LMSystemError::blob_operation(format!(
                "blob not found: {blob_id}"
            ))),
        }
    }
}
