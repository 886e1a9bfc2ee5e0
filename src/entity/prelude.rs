pub use super::class_fees::Entity as ClassFees;
pub use super::class_students::Entity as ClassStudents;
pub use super::classes::Entity as Classes;
pub use super::fees::Entity as Fees;
pub use super::homeworks::Entity as Homeworks;
pub use super::submissions::Entity as Submissions;
pub use super::users::Entity as Users;
