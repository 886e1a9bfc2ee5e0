pub mod audio;
pub mod auth;
pub mod cascade;
pub mod classes;
pub mod fees;
pub mod homeworks;
pub mod submissions;

pub use audio::AudioService;
pub use auth::AuthService;
pub use cascade::CascadeManager;
pub use classes::ClassService;
pub use fees::FeeService;
pub use homeworks::HomeworkService;
pub use submissions::SubmissionService;
