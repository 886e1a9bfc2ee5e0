//! 班级收费标准实体
//!
//! 每个班级至多一条记录（class_id 唯一），重复设置走更新。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub class_id: i64,
    pub teacher_id: i64,
    pub amount: f64,
    pub frequency: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_fee(self) -> crate::models::fees::entities::ClassFee {
        use crate::models::fees::entities::{ClassFee, FeeFrequency};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        ClassFee {
            id: self.id,
            class_id: self.class_id,
            teacher_id: self.teacher_id,
            amount: self.amount,
            frequency: FeeFrequency::from_str(&self.frequency).unwrap_or(FeeFrequency::Monthly),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
