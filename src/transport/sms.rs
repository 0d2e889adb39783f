use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::TransportError;
use super::ids::{TransportMessageId, pick_message_id};
use crate::domain::{
    BulkMessageResult, CheckStatus, CheckStatusResponse, MessageId, MessageText, PhoneNumber,
    SendBulkSms, SendBulkSmsResponse, SendSms, SendSmsResponse, ValidationError,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendSmsJsonResponse {
    success: bool,
    #[serde(default)]
    message_id: Option<TransportMessageId>,
    #[serde(default, rename = "message_id")]
    legacy_message_id: Option<TransportMessageId>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    new_service: Option<bool>,
    #[serde(default)]
    msg_count: Option<u32>,
    #[serde(default)]
    send_at: Option<String>,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    encode: Option<String>,
    #[serde(default)]
    segment: Option<u32>,
    #[serde(default)]
    sms_characters: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendBulkJsonResponse {
    success: bool,
    #[serde(default)]
    total_count: Option<u32>,
    #[serde(default)]
    success_count: Option<u32>,
    #[serde(default)]
    failed_count: Option<u32>,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    messages: Vec<BulkMessageJsonResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkMessageJsonResult {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    message_id: Option<TransportMessageId>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckStatusJsonResponse {
    success: bool,
    status: String,
    #[serde(default)]
    message_id: Option<TransportMessageId>,
    #[serde(default, rename = "message_id")]
    legacy_message_id: Option<TransportMessageId>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    encode: Option<String>,
    #[serde(default)]
    send_at: Option<String>,
    #[serde(default)]
    segment: Option<u32>,
    #[serde(default)]
    sms_characters: Option<u32>,
}

pub fn encode_send_sms_payload(request: &SendSms) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("to".to_owned(), json!(request.to().as_str()));
    payload.insert("from".to_owned(), json!(request.from().as_str()));
    payload.insert(MessageText::FIELD.to_owned(), json!(request.text().as_str()));
    payload.insert("urgent".to_owned(), json!(request.options().urgent));
    payload
}

pub fn encode_send_bulk_payload(request: &SendBulkSms) -> Map<String, Value> {
    let recipients = request
        .recipients()
        .iter()
        .map(|phone| Value::from(phone.as_str()))
        .collect::<Vec<_>>();

    let mut payload = Map::new();
    payload.insert("from".to_owned(), json!(request.from().as_str()));
    payload.insert("to".to_owned(), Value::Array(recipients));
    payload.insert(MessageText::FIELD.to_owned(), json!(request.text().as_str()));
    payload.insert("urgent".to_owned(), json!(request.options().urgent));
    if let Some(no_sms_number) = &request.options().no_sms_number {
        payload.insert("noSmsNumber".to_owned(), json!(no_sms_number));
    }
    payload
}

pub fn encode_check_status_payload(request: &CheckStatus) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert(
        MessageId::FIELD.to_owned(),
        json!(request.message_id().as_str()),
    );
    payload
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    let message_id = pick_message_id(parsed.message_id, parsed.legacy_message_id)?.ok_or(
        ValidationError::Required {
            field: MessageId::FIELD,
            expected: "a number or string",
        },
    )?;

    Ok(SendSmsResponse {
        success: parsed.success,
        message_id,
        user_id: parsed.user_id,
        from: parsed.from,
        to: parsed.to,
        text: parsed.text,
        new_service: parsed.new_service,
        msg_count: parsed.msg_count,
        send_at: parsed.send_at,
        balance: parsed.balance,
        encode: parsed.encode,
        segment: parsed.segment,
        sms_characters: parsed.sms_characters,
    })
}

pub fn decode_send_bulk_json_response(json: &str) -> Result<SendBulkSmsResponse, TransportError> {
    let parsed: SendBulkJsonResponse = serde_json::from_str(json)?;
    let messages = parsed
        .messages
        .into_iter()
        .map(|item| {
            Ok(BulkMessageResult {
                success: item.success,
                to: item.to.map(PhoneNumber::new).transpose()?,
                message_id: item
                    .message_id
                    .map(TransportMessageId::into_domain)
                    .transpose()?,
                error: item.error,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(SendBulkSmsResponse {
        success: parsed.success,
        total_count: parsed.total_count,
        success_count: parsed.success_count,
        failed_count: parsed.failed_count,
        balance: parsed.balance,
        messages,
    })
}

pub fn decode_check_status_json_response(
    json: &str,
) -> Result<CheckStatusResponse, TransportError> {
    let parsed: CheckStatusJsonResponse = serde_json::from_str(json)?;
    Ok(CheckStatusResponse {
        success: parsed.success,
        message_id: pick_message_id(parsed.message_id, parsed.legacy_message_id)?,
        status: parsed.status,
        from: parsed.from,
        to: parsed.to,
        text: parsed.text,
        encode: parsed.encode,
        send_at: parsed.send_at,
        segment: parsed.segment,
        sms_characters: parsed.sms_characters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BulkOptions, SendOptions, SenderName};

    fn phone(value: &str) -> PhoneNumber {
        PhoneNumber::new(value).unwrap()
    }

    #[test]
    fn encode_send_sms_sets_all_fields() {
        let request = SendSms::new(
            phone("995555123456"),
            MessageText::new("Test message").unwrap(),
            SenderName::new("GOSMS").unwrap(),
            SendOptions { urgent: true },
        );

        let payload = Value::Object(encode_send_sms_payload(&request));
        assert_eq!(
            payload,
            json!({
                "to": "995555123456",
                "from": "GOSMS",
                "text": "Test message",
                "urgent": true,
            })
        );
    }

    #[test]
    fn encode_send_bulk_includes_no_sms_number_only_when_set() {
        let build = |options: BulkOptions| {
            SendBulkSms::new(
                SenderName::new("GOSMS").unwrap(),
                vec![phone("995555000001"), phone("995555000002")],
                MessageText::new("Bulk").unwrap(),
                options,
            )
            .unwrap()
        };

        let payload = encode_send_bulk_payload(&build(BulkOptions::default()));
        assert_eq!(
            payload.get("to"),
            Some(&json!(["995555000001", "995555000002"]))
        );
        assert_eq!(payload.get("urgent"), Some(&json!(false)));
        assert!(!payload.contains_key("noSmsNumber"));

        let payload = encode_send_bulk_payload(&build(BulkOptions {
            urgent: false,
            no_sms_number: Some("91234".to_owned()),
        }));
        assert_eq!(payload.get("noSmsNumber"), Some(&json!("91234")));
    }

    #[test]
    fn encode_check_status_uses_camel_case_key() {
        let request = CheckStatus::new(MessageId::new("12345").unwrap());
        let payload = encode_check_status_payload(&request);
        assert_eq!(payload.get("messageId"), Some(&json!("12345")));
    }

    #[test]
    fn decode_send_sms_maps_payload() {
        let json = r#"
        {
          "success": true,
          "userId": "user123",
          "message_id": 12345,
          "messageId": 12345,
          "from": "GOSMS",
          "to": "995555123456",
          "text": "Test message",
          "newService": false,
          "msgCount": 1,
          "sendAt": "2024-01-01T10:00:00.000Z",
          "balance": 100,
          "encode": "UTF-8",
          "segment": 1,
          "smsCharacters": 12
        }
        "#;

        let parsed = decode_send_sms_json_response(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message_id.as_str(), "12345");
        assert_eq!(parsed.user_id.as_deref(), Some("user123"));
        assert_eq!(parsed.balance, Some(100.0));
        assert_eq!(parsed.msg_count, Some(1));
        assert_eq!(parsed.sms_characters, Some(12));
        assert_eq!(parsed.send_at.as_deref(), Some("2024-01-01T10:00:00.000Z"));
    }

    #[test]
    fn decode_send_sms_requires_message_id() {
        let err = decode_send_sms_json_response(r#"{ "success": true }"#).unwrap_err();
        assert!(matches!(err, TransportError::Value(_)));
    }

    #[test]
    fn decode_send_bulk_maps_items() {
        let json = r#"
        {
          "success": true,
          "totalCount": 2,
          "successCount": 1,
          "failedCount": 1,
          "balance": 98,
          "messages": [
            { "messageId": 1, "to": "995555000001", "success": true },
            { "to": "995555000002", "success": false, "error": "Invalid number" }
          ]
        }
        "#;

        let parsed = decode_send_bulk_json_response(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.total_count, Some(2));
        assert_eq!(parsed.messages.len(), 2);
        assert_eq!(parsed.messages[0].message_id, Some(MessageId::from(1)));
        assert!(!parsed.messages[1].success);
        assert_eq!(parsed.messages[1].error.as_deref(), Some("Invalid number"));
    }

    #[test]
    fn decode_check_status_accepts_legacy_id_key() {
        let json = r#"
        {
          "success": true,
          "message_id": "12345",
          "status": "delivered"
        }
        "#;

        let parsed = decode_check_status_json_response(json).unwrap();
        assert_eq!(parsed.status, "delivered");
        assert_eq!(parsed.message_id, Some(MessageId::new("12345").unwrap()));
        assert_eq!(parsed.from, None);
    }
}
