//! SeaORM 数据库实体定义

pub mod class_fees;
pub mod class_students;
pub mod classes;
pub mod fees;
pub mod homeworks;
pub mod prelude;
pub mod submissions;
pub mod users;
