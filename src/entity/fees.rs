//! 缴费记录实体
//!
//! 只增不改：记录只会被创建，或随班级级联删除。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub amount_paid: f64,
    pub description: Option<String>,
    pub paid_by: i64,
    pub paid_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_fee(self) -> crate::models::fees::entities::Fee {
        use crate::models::fees::entities::Fee;
        use chrono::{DateTime, Utc};

        Fee {
            id: self.id,
            class_id: self.class_id,
            student_id: self.student_id,
            amount_paid: self.amount_paid,
            description: self.description,
            paid_by: self.paid_by,
            paid_at: DateTime::<Utc>::from_timestamp(self.paid_at, 0).unwrap_or_default(),
        }
    }
}
