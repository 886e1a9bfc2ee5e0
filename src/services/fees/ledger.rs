//! 费用台账
//!
//! 系统里并存两种"已缴费"口径，刻意不统一：
//! - `class_payment_summary`：只看有没有缴费记录，缴过一次就算已缴；
//! - `student_balance`：按收费标准金额做差额核算，允许出现负数（超缴）。

use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::fees::responses::{ClassPaymentSummary, StudentBalance};
use crate::models::users::entities::UserBrief;
use crate::storage::Storage;

pub struct FeeLedger {
    storage: Arc<dyn Storage>,
}

impl FeeLedger {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 班级缴费概览：名册按是否存在缴费记录二分，保持名册顺序
    ///
    /// 多次缴费的学生也只在 paid 里出现一次。
    pub async fn class_payment_summary(&self, class_id: i64) -> Result<ClassPaymentSummary> {
        let roster = self.storage.list_class_students(class_id).await?;
        let fees = self.storage.list_fees_by_class(class_id).await?;

        let paid_ids: HashSet<i64> = fees.iter().map(|f| f.student_id).collect();

        let mut paid = Vec::new();
        let mut unpaid = Vec::new();
        for member in roster {
            let Some(user) = self.storage.get_user_by_id(member.student_id).await? else {
                continue;
            };
            let brief = UserBrief::from(&user);
            if paid_ids.contains(&member.student_id) {
                paid.push(brief);
            } else {
                unpaid.push(brief);
            }
        }

        Ok(ClassPaymentSummary { paid, unpaid })
    }

    /// 学生在某班级的缴费状态
    ///
    /// 没有收费标准时 remaining 恒为 0；不在 0 处截断，超缴返回负数。
    pub async fn student_balance(&self, class_id: i64, student_id: i64) -> Result<StudentBalance> {
        let payments = self
            .storage
            .list_fees_by_class_and_student(class_id, student_id)
            .await?;
        let total_paid: f64 = payments.iter().map(|p| p.amount_paid).sum();

        let remaining = match self.storage.get_class_fee_by_class(class_id).await? {
            Some(schedule) => schedule.amount - total_paid,
            None => 0.0,
        };

        Ok(StudentBalance {
            total_paid,
            remaining,
            payments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fees::entities::FeeFrequency;
    use crate::models::fees::requests::{RecordPaymentRequest, SetClassFeeRequest};
    use crate::models::users::entities::UserRole;
    use crate::storage::memory::MemoryStorage;

    async fn pay(storage: &MemoryStorage, class_id: i64, student_id: i64, amount: f64) {
        storage
            .create_fee(
                student_id,
                RecordPaymentRequest {
                    class_id,
                    amount_paid: amount,
                    description: None,
                },
            )
            .await
            .unwrap();
    }

    async fn set_fee(storage: &MemoryStorage, teacher_id: i64, class_id: i64, amount: f64) {
        storage
            .upsert_class_fee(
                teacher_id,
                SetClassFeeRequest {
                    class_id,
                    amount,
                    frequency: FeeFrequency::Monthly,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_student_balance_partial_payment() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let student = storage.seed_user("student1", UserRole::Student).await;
        set_fee(&storage, teacher.id, 1, 100.0).await;
        pay(&storage, 1, student.id, 40.0).await;
        pay(&storage, 1, student.id, 35.0).await;

        let ledger = FeeLedger::new(storage.clone());
        let balance = ledger.student_balance(1, student.id).await.unwrap();
        assert_eq!(balance.total_paid, 75.0);
        assert_eq!(balance.remaining, 25.0);
        assert_eq!(balance.payments.len(), 2);
    }

    #[tokio::test]
    async fn test_student_balance_without_schedule_is_zero() {
        let storage = Arc::new(MemoryStorage::new());
        let student = storage.seed_user("student1", UserRole::Student).await;
        pay(&storage, 1, student.id, 40.0).await;

        let ledger = FeeLedger::new(storage.clone());
        let balance = ledger.student_balance(1, student.id).await.unwrap();
        assert_eq!(balance.total_paid, 40.0);
        assert_eq!(balance.remaining, 0.0);
    }

    #[tokio::test]
    async fn test_student_balance_overpayment_goes_negative() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let student = storage.seed_user("student1", UserRole::Student).await;
        set_fee(&storage, teacher.id, 1, 100.0).await;
        pay(&storage, 1, student.id, 120.0).await;

        let ledger = FeeLedger::new(storage.clone());
        let balance = ledger.student_balance(1, student.id).await.unwrap();
        assert_eq!(balance.remaining, -20.0);
    }

    #[tokio::test]
    async fn test_payment_summary_partitions_roster_by_existence() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        let a = storage.seed_user("alice", UserRole::Student).await;
        let b = storage.seed_user("bobby", UserRole::Student).await;
        let c = storage.seed_user("carol", UserRole::Student).await;
        let class = storage
            .create_class(
                teacher.id,
                crate::models::classes::requests::CreateClassRequest {
                    title: "Piano 101".to_string(),
                    description: None,
                    url: None,
                    start_date: "2025-09-01".to_string(),
                    end_date: "2026-01-31".to_string(),
                    schedule: None,
                    fee: None,
                },
            )
            .await
            .unwrap();
        for student in [&a, &b, &c] {
            storage.enroll_student(class.id, student.id).await.unwrap();
        }

        // A 缴了两次，B、C 没缴
        pay(&storage, class.id, a.id, 10.0).await;
        pay(&storage, class.id, a.id, 15.0).await;

        let ledger = FeeLedger::new(storage.clone());
        let summary = ledger.class_payment_summary(class.id).await.unwrap();

        // 多次缴费只算一次"已缴"
        assert_eq!(summary.paid.len(), 1);
        assert_eq!(summary.paid[0].id, a.id);
        // 未缴的保持名册顺序
        assert_eq!(
            summary.unpaid.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![b.id, c.id]
        );
    }

    #[tokio::test]
    async fn test_set_class_fee_upserts_single_record() {
        let storage = Arc::new(MemoryStorage::new());
        let teacher = storage.seed_user("teacher1", UserRole::Teacher).await;
        set_fee(&storage, teacher.id, 1, 50.0).await;
        set_fee(&storage, teacher.id, 1, 75.0).await;

        let schedule = storage
            .get_class_fee_by_class(1)
            .await
            .unwrap()
            .expect("schedule exists");
        assert_eq!(schedule.amount, 75.0);

        // 差额按最新金额算
        let student = storage.seed_user("student1", UserRole::Student).await;
        pay(&storage, 1, student.id, 25.0).await;
        let ledger = FeeLedger::new(storage.clone());
        let balance = ledger.student_balance(1, student.id).await.unwrap();
        assert_eq!(balance.remaining, 50.0);
    }
}
