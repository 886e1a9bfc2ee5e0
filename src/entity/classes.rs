//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    // 上课时间表，JSON 序列化的 ClassSchedule
    #[sea_orm(column_type = "Text", nullable)]
    pub schedule: Option<String>,
    pub fee_amount: Option<f64>,
    pub fee_frequency: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_students::Entity")]
    ClassStudents,
    #[sea_orm(has_many = "super::homeworks::Entity")]
    Homeworks,
    #[sea_orm(has_many = "super::fees::Entity")]
    Fees,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassStudents.def()
    }
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworks.def()
    }
}

impl Related<super::fees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::{Class, ClassFeeTemplate};
        use crate::models::fees::entities::FeeFrequency;
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        // 嵌入的收费模板：金额和频率都存在时才有效
        let fee = match (self.fee_amount, self.fee_frequency.as_deref()) {
            (Some(amount), Some(freq)) => FeeFrequency::from_str(freq)
                .ok()
                .map(|frequency| ClassFeeTemplate { amount, frequency }),
            _ => None,
        };

        Class {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            teacher_id: self.teacher_id,
            schedule: self
                .schedule
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok()),
            start_date: self.start_date,
            end_date: self.end_date,
            fee,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
