//! API 错误码目录
//!
//! 按业务域分段：1xxx 认证、2xxx 用户、3xxx 班级、4xxx 作业、
//! 5xxx 提交、6xxx 音频、7xxx 费用、9xxx 通用。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 认证相关
    Unauthorized = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    UserInactive = 1004,

    // 用户相关
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserCreateFailed = 2003,
    PasswordTooWeak = 2004,

    // 班级相关
    ClassNotFound = 3001,
    ClassPermissionDenied = 3002,
    ClassCreateFailed = 3003,
    ClassUpdateFailed = 3004,
    ClassDeleteFailed = 3005,
    ClassEnrollFailed = 3006,

    // 作业相关
    HomeworkNotFound = 4001,
    HomeworkPermissionDenied = 4002,
    HomeworkCreateFailed = 4003,
    HomeworkDeleteFailed = 4004,

    // 提交相关
    SubmissionNotFound = 5001,
    SubmissionLimitExceeded = 5002,
    SubmissionCreateFailed = 5003,
    SubmissionGradeFailed = 5004,

    // 音频文件相关
    AudioNotFound = 6001,
    AudioTypeNotAllowed = 6002,
    AudioSizeExceeded = 6003,
    AudioUploadFailed = 6004,
    MultifileUploadNotAllowed = 6005,

    // 费用相关
    ClassFeeSetFailed = 7001,
    PaymentRecordFailed = 7002,

    // 通用
    BadRequest = 9001,
    Forbidden = 9003,
    NotFound = 9004,
    InternalServerError = 9500,
}
