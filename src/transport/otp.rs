use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::TransportError;
use crate::domain::{OtpCode, OtpHash, OtpSendResponse, OtpVerifyResponse, SendOtp, VerifyOtp};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OtpSendJsonResponse {
    success: bool,
    hash: String,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    send_at: Option<String>,
    #[serde(default)]
    encode: Option<String>,
    #[serde(default)]
    segment: Option<u32>,
    #[serde(default)]
    sms_characters: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct OtpVerifyJsonResponse {
    success: bool,
    verify: bool,
}

pub fn encode_send_otp_payload(request: &SendOtp) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("phone".to_owned(), json!(request.phone().as_str()));
    payload
}

pub fn encode_verify_otp_payload(request: &VerifyOtp) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("phone".to_owned(), json!(request.phone().as_str()));
    payload.insert(OtpHash::FIELD.to_owned(), json!(request.hash().as_str()));
    payload.insert(OtpCode::FIELD.to_owned(), json!(request.code().as_str()));
    payload
}

pub fn decode_otp_send_json_response(json: &str) -> Result<OtpSendResponse, TransportError> {
    let parsed: OtpSendJsonResponse = serde_json::from_str(json)?;
    Ok(OtpSendResponse {
        success: parsed.success,
        hash: parsed.hash,
        balance: parsed.balance,
        to: parsed.to,
        send_at: parsed.send_at,
        encode: parsed.encode,
        segment: parsed.segment,
        sms_characters: parsed.sms_characters,
    })
}

pub fn decode_otp_verify_json_response(json: &str) -> Result<OtpVerifyResponse, TransportError> {
    let parsed: OtpVerifyJsonResponse = serde_json::from_str(json)?;
    Ok(OtpVerifyResponse {
        success: parsed.success,
        verify: parsed.verify,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;

    #[test]
    fn encode_verify_otp_sets_phone_hash_and_code() {
        let request = VerifyOtp::new(
            PhoneNumber::new("995555123456").unwrap(),
            OtpHash::new("abc123hash").unwrap(),
            OtpCode::new("1234").unwrap(),
        );

        let payload = Value::Object(encode_verify_otp_payload(&request));
        assert_eq!(
            payload,
            json!({
                "phone": "995555123456",
                "hash": "abc123hash",
                "code": "1234",
            })
        );
    }

    #[test]
    fn decode_otp_send_maps_hash() {
        let json = r#"
        {
          "success": true,
          "hash": "abc123hash",
          "balance": 100,
          "to": "995555123456",
          "encode": "UTF-8",
          "segment": 1,
          "smsCharacters": 20
        }
        "#;

        let parsed = decode_otp_send_json_response(json).unwrap();
        assert_eq!(parsed.hash, "abc123hash");
        assert_eq!(parsed.sms_characters, Some(20));
        assert_eq!(parsed.send_at, None);
    }

    #[test]
    fn decode_otp_verify_keeps_negative_result() {
        let parsed =
            decode_otp_verify_json_response(r#"{ "success": true, "verify": false }"#).unwrap();
        assert_eq!(
            parsed,
            OtpVerifyResponse {
                success: true,
                verify: false,
            }
        );
    }

    #[test]
    fn decode_otp_send_requires_hash() {
        assert!(decode_otp_send_json_response(r#"{ "success": true }"#).is_err());
    }
}
