pub mod audio;

pub mod auth;

pub mod classes;

pub mod fees;

pub mod homeworks;

pub mod submissions;

pub use audio::configure_audio_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use fees::configure_fee_routes;
pub use homeworks::configure_homeworks_routes;
pub use submissions::configure_submissions_routes;
