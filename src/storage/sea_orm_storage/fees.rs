//! 费用存储操作

use super::SeaOrmStorage;
use crate::entity::class_fees::{
    ActiveModel as ClassFeeActiveModel, Column as ClassFeeColumn, Entity as ClassFees,
};
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{LMSystemError, Result};
use crate::models::fees::{
    entities::{ClassFee, Fee},
    requests::{RecordPaymentRequest, SetClassFeeRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 记录缴费
    pub async fn create_fee_impl(
        &self,
        student_id: i64,
        payment: RecordPaymentRequest,
    ) -> Result<Fee> {
        let model = ActiveModel {
            class_id: Set(payment.class_id),
            student_id: Set(student_id),
            amount_paid: Set(payment.amount_paid),
            description: Set(payment.description),
            paid_by: Set(student_id),
            paid_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("记录缴费失败: {e}")))?;

        Ok(result.into_fee())
    }

    /// 班级全部缴费记录
    pub async fn list_fees_by_class_impl(&self, class_id: i64) -> Result<Vec<Fee>> {
        let results = Fees::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::PaidAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询班级缴费失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_fee()).collect())
    }

    /// 某学生在某班级的缴费记录
    pub async fn list_fees_by_class_and_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<Fee>> {
        let results = Fees::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::PaidAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询学生缴费失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_fee()).collect())
    }

    /// 某学生在某班级是否有任一缴费记录
    pub async fn has_fee_record_impl(&self, class_id: i64, student_id: i64) -> Result<bool> {
        let count = Fees::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(count > 0)
    }

    /// 删除班级全部缴费记录
    pub async fn delete_fees_by_class_impl(&self, class_id: i64) -> Result<u64> {
        let result = Fees::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除班级缴费失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 设置班级收费标准
    ///
    /// 已有记录时原地更新金额和周期，始终保持每班至多一条。
    pub async fn upsert_class_fee_impl(
        &self,
        teacher_id: i64,
        fee: SetClassFeeRequest,
    ) -> Result<ClassFee> {
        let now = chrono::Utc::now().timestamp();

        let existing = ClassFees::find()
            .filter(ClassFeeColumn::ClassId.eq(fee.class_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询收费标准失败: {e}")))?;

        let result = match existing {
            Some(current) => {
                let model = ClassFeeActiveModel {
                    id: Set(current.id),
                    amount: Set(fee.amount),
                    frequency: Set(fee.frequency.to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    LMSystemError::database_operation(format!("更新收费标准失败: {e}"))
                })?
            }
            None => {
                let model = ClassFeeActiveModel {
                    class_id: Set(fee.class_id),
                    teacher_id: Set(teacher_id),
                    amount: Set(fee.amount),
                    frequency: Set(fee.frequency.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    LMSystemError::database_operation(format!("创建收费标准失败: {e}"))
                })?
            }
        };

        Ok(result.into_class_fee())
    }

    /// 查询班级收费标准
    pub async fn get_class_fee_by_class_impl(&self, class_id: i64) -> Result<Option<ClassFee>> {
        let result = ClassFees::find()
            .filter(ClassFeeColumn::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询收费标准失败: {e}")))?;

        Ok(result.map(|m| m.into_class_fee()))
    }

    /// 删除班级收费标准
    pub async fn delete_class_fee_by_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = ClassFees::delete_many()
            .filter(ClassFeeColumn::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除收费标准失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
