//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    BulkOptions, CheckStatus, CreateSender, SendBulkSms, SendOptions, SendOtp, SendSms, VerifyOtp,
};
pub use response::{
    ApiError, BalanceResponse, BulkMessageResult, CheckStatusResponse, OtpSendResponse,
    OtpVerifyResponse, SendBulkSmsResponse, SendSmsResponse, SenderCreateResponse,
};
pub use validation::ValidationError;
pub use value::{ApiKey, MessageId, MessageText, OtpCode, OtpHash, PhoneNumber, SenderName};
