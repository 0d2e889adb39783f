use std::fmt;

use crate::domain::value::{MessageId, PhoneNumber};

/// Error value reported by GOSMS.ge with a non-2xx HTTP status
/// (`{"errorCode": 101, "message": "Invalid API key"}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub error_code: i64,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.error_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    pub success: bool,
    pub message_id: MessageId,
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub new_service: Option<bool>,
    pub msg_count: Option<u32>,
    pub send_at: Option<String>,
    pub balance: Option<f64>,
    pub encode: Option<String>,
    pub segment: Option<u32>,
    pub sms_characters: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendBulkSmsResponse {
    pub success: bool,
    pub total_count: Option<u32>,
    pub success_count: Option<u32>,
    pub failed_count: Option<u32>,
    pub balance: Option<f64>,
    pub messages: Vec<BulkMessageResult>,
}

impl SendBulkSmsResponse {
    /// Items the gateway did not accept. A 2xx bulk call is a success even when
    /// some of its items failed.
    pub fn failed(&self) -> impl Iterator<Item = &BulkMessageResult> {
        self.messages.iter().filter(|item| !item.success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMessageResult {
    pub success: bool,
    pub to: Option<PhoneNumber>,
    pub message_id: Option<MessageId>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtpSendResponse {
    pub success: bool,
    pub hash: String,
    pub balance: Option<f64>,
    pub to: Option<String>,
    pub send_at: Option<String>,
    pub encode: Option<String>,
    pub segment: Option<u32>,
    pub sms_characters: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpVerifyResponse {
    pub success: bool,
    pub verify: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStatusResponse {
    pub success: bool,
    pub message_id: Option<MessageId>,
    pub status: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub encode: Option<String>,
    pub send_at: Option<String>,
    pub segment: Option<u32>,
    pub sms_characters: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceResponse {
    pub success: bool,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderCreateResponse {
    pub success: bool,
}
