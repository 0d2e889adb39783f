//! Transport layer: endpoint paths and wire-format details (serialization/deserialization).

mod account;
mod ids;
mod otp;
mod sms;

use serde::Deserialize;

use crate::domain::{ApiError, ValidationError};

pub use account::{
    decode_balance_json_response, decode_sender_create_json_response, encode_balance_payload,
    encode_create_sender_payload,
};
pub use otp::{
    decode_otp_send_json_response, decode_otp_verify_json_response, encode_send_otp_payload,
    encode_verify_otp_payload,
};
pub use sms::{
    decode_check_status_json_response, decode_send_bulk_json_response,
    decode_send_sms_json_response, encode_check_status_payload, encode_send_bulk_payload,
    encode_send_sms_payload,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value in response: {0}")]
    Value(#[from] ValidationError),
}

impl TransportError {
    /// The body is not JSON at all (syntax error or truncated input), as opposed to
    /// JSON that does not fit the expected shape.
    pub fn is_malformed_json(&self) -> bool {
        match self {
            Self::Json(err) => err.is_syntax() || err.is_eof(),
            Self::Value(_) => false,
        }
    }
}

/// Gateway operations, each mapped to a path below the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SendSms,
    SendBulk,
    SendOtp,
    VerifyOtp,
    CheckStatus,
    Balance,
    CreateSender,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::SendSms => "sendsms",
            Self::SendBulk => "sendbulk",
            Self::SendOtp => "otp/send",
            Self::VerifyOtp => "otp/verify",
            Self::CheckStatus => "checksms",
            Self::Balance => "sms-balance",
            Self::CreateSender => "sender",
        }
    }

    /// `sms-balance` also expects the key in the query string.
    pub fn api_key_in_query(self) -> bool {
        matches!(self, Self::Balance)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorJsonResponse {
    error_code: i64,
    message: String,
}

/// Decode the `{errorCode, message}` body sent with non-2xx statuses.
pub fn decode_api_error_json_response(json: &str) -> Result<ApiError, TransportError> {
    let parsed: ErrorJsonResponse = serde_json::from_str(json)?;
    Ok(ApiError {
        error_code: parsed.error_code,
        message: parsed.message,
    })
}
