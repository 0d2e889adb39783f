use std::fmt;

use crate::domain::validation::ValidationError;

const NON_EMPTY_STRING: &str = "a non-empty string";

fn require_non_blank(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field,
            expected: NON_EMPTY_STRING,
        });
    }
    Ok(value)
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// GOSMS.ge API key (`api_key`).
///
/// Invariant: not blank; the value is kept as provided. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Payload field name used by GOSMS.ge (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Environment variable read by [`ApiKey::from_env`].
    pub const ENV_VAR: &'static str = "GOSMS_API_KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Read the key from `GOSMS_API_KEY`. A missing variable is reported the same
    /// way as an empty key.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::new(std::env::var(Self::ENV_VAR).unwrap_or_default())
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number, passed to the gateway as-is (e.g. `995555123456`).
///
/// Invariant: not blank; the value is kept as provided. No numbering-plan validation is done here;
/// the gateway rejects numbers it cannot route.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parameter name reported in validation errors.
    pub const FIELD: &'static str = "phone";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated phone number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: not blank. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Payload field name used by GOSMS.ge (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name shown as the message originator (`from`), or the name to register
/// through `sender`.
///
/// Invariant: not blank; the value is kept as provided. Names must be approved on the account before use.
pub struct SenderName(String);

impl SenderName {
    /// Parameter name reported in validation errors.
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OTP hash returned by `otp/send` and echoed back to `otp/verify`.
pub struct OtpHash(String);

impl OtpHash {
    /// Payload field name used by GOSMS.ge (`hash`).
    pub const FIELD: &'static str = "hash";

    /// Create a validated [`OtpHash`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated hash.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Code typed in by the user for `otp/verify`.
pub struct OtpCode(String);

impl OtpCode {
    /// Payload field name used by GOSMS.ge (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`OtpCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// GOSMS.ge message id returned by `sendsms` and accepted by `checksms`.
///
/// The gateway emits ids as either JSON numbers or strings; both are kept as text.
///
/// Invariant: not blank; the value is kept as provided.
pub struct MessageId(String);

impl MessageId {
    /// Payload field name used by GOSMS.ge (`messageId`).
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
