use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageId, MessageText, OtpCode, OtpHash, PhoneNumber, SenderName};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub urgent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOptions {
    pub urgent: bool,
    pub no_sms_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    to: PhoneNumber,
    from: SenderName,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn new(to: PhoneNumber, text: MessageText, from: SenderName, options: SendOptions) -> Self {
        Self {
            to,
            from,
            text,
            options,
        }
    }

    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &SenderName {
        &self.from
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct SendBulkSms {
    from: SenderName,
    recipients: Vec<PhoneNumber>,
    text: MessageText,
    options: BulkOptions,
}

impl SendBulkSms {
    /// Parameter name reported when the recipient list is empty.
    pub const RECIPIENTS_FIELD: &'static str = "phones";

    pub fn new(
        from: SenderName,
        recipients: Vec<PhoneNumber>,
        text: MessageText,
        options: BulkOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Required {
                field: Self::RECIPIENTS_FIELD,
                expected: "a non-empty list of phone numbers",
            });
        }
        Ok(Self {
            from,
            recipients,
            text,
            options,
        })
    }

    pub fn from(&self) -> &SenderName {
        &self.from
    }

    pub fn recipients(&self) -> &[PhoneNumber] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &BulkOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct SendOtp {
    phone: PhoneNumber,
}

impl SendOtp {
    pub fn new(phone: PhoneNumber) -> Self {
        Self { phone }
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

#[derive(Debug, Clone)]
pub struct VerifyOtp {
    phone: PhoneNumber,
    hash: OtpHash,
    code: OtpCode,
}

impl VerifyOtp {
    pub fn new(phone: PhoneNumber, hash: OtpHash, code: OtpCode) -> Self {
        Self { phone, hash, code }
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn hash(&self) -> &OtpHash {
        &self.hash
    }

    pub fn code(&self) -> &OtpCode {
        &self.code
    }
}

#[derive(Debug, Clone)]
pub struct CheckStatus {
    message_id: MessageId,
}

impl CheckStatus {
    pub fn new(message_id: MessageId) -> Self {
        Self { message_id }
    }

    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }
}

#[derive(Debug, Clone)]
pub struct CreateSender {
    name: SenderName,
}

impl CreateSender {
    pub fn new(name: SenderName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &SenderName {
        &self.name
    }
}
