//! Typed Rust client for the GOSMS.ge HTTP API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer that validates arguments and
//! runs each request with a per-attempt timeout and exponential-backoff retries.
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use gosms::{ApiKey, GoSmsClient, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gosms::GoSmsError> {
//!     let client = GoSmsClient::builder(ApiKey::new("...")?)
//!         .timeout(Duration::from_secs(10))
//!         .retries(3)
//!         .build()?;
//!     let sent = client
//!         .send("995555123456", "hello", "GOSMS", SendOptions::default())
//!         .await?;
//!     let _status = client.status(sent.message_id.as_str()).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ClientOptions, GoSmsClient, GoSmsClientBuilder, GoSmsError};
pub use domain::{
    ApiError, ApiKey, BalanceResponse, BulkMessageResult, BulkOptions, CheckStatusResponse,
    MessageId, OtpSendResponse, OtpVerifyResponse, SendBulkSmsResponse, SendOptions,
    SendSmsResponse, SenderCreateResponse, ValidationError,
};
