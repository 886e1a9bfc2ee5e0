pub mod extractor;
pub mod jwt;
pub mod multipart;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{SafeClassIdI64, SafeHomeworkIdI64, SafeSubmissionIdI64};
pub use multipart::{AudioForm, UploadedAudio, read_audio_form};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
