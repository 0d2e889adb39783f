use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::TransportError;
use crate::domain::{BalanceResponse, CreateSender, SenderCreateResponse};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    success: bool,
    balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct SenderCreateJsonResponse {
    success: bool,
}

/// `sms-balance` carries nothing beyond the key the client adds.
pub fn encode_balance_payload() -> Map<String, Value> {
    Map::new()
}

pub fn encode_create_sender_payload(request: &CreateSender) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("name".to_owned(), json!(request.name().as_str()));
    payload
}

pub fn decode_balance_json_response(json: &str) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    Ok(BalanceResponse {
        success: parsed.success,
        balance: parsed.balance,
    })
}

pub fn decode_sender_create_json_response(
    json: &str,
) -> Result<SenderCreateResponse, TransportError> {
    let parsed: SenderCreateJsonResponse = serde_json::from_str(json)?;
    Ok(SenderCreateResponse {
        success: parsed.success,
    })
}
