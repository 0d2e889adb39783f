//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use url::Url;

use crate::domain::{
    ApiError, ApiKey, BalanceResponse, BulkOptions, CheckStatus, CheckStatusResponse,
    CreateSender, MessageId, MessageText, OtpCode, OtpHash, OtpSendResponse, OtpVerifyResponse,
    PhoneNumber, SendBulkSms, SendBulkSmsResponse, SendOptions, SendOtp, SendSms,
    SendSmsResponse, SenderCreateResponse, SenderName, ValidationError, VerifyOtp,
};
use crate::transport::{self, Endpoint, TransportError};

mod retry;

#[cfg(test)]
mod fake;

use retry::{Call, RetryPolicy};

const DEFAULT_BASE_URL: &str = "https://api.gosms.ge/api/";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // The balance URL carries the API key in its query string.
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(redact_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(redact_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn redact_url(err: reqwest::Error) -> Box<dyn StdError + Send + Sync> {
    Box::new(err.without_url())
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GoSmsClient`].
///
/// [`GoSmsError::Validation`] is raised before any request is sent and is never
/// retried. Every other variant describes a failed attempt; when the attempt
/// budget runs out the failure of the last attempt is returned.
pub enum GoSmsError {
    /// One of the arguments was missing or blank.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, connection reset, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The attempt did not finish within the configured per-attempt timeout.
    #[error("request timed out after {after:?}")]
    Timeout { after: Duration },

    /// Response body was not valid JSON, or a non-2xx body was not an `{errorCode, message}` value.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A 2xx body was valid JSON but did not match the endpoint's response shape.
    ///
    /// The gateway already accepted the request, so this is never retried.
    #[error("unexpected response shape: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// GOSMS.ge answered with a non-2xx status and an `{errorCode, message}` body.
    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl GoSmsError {
    /// The remote error value, if the gateway reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether another attempt could change the outcome without repeating an
    /// accepted request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout { .. } | Self::Parse(_) | Self::Api { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Operational options for [`GoSmsClient`].
pub struct ClientOptions {
    /// Emit `tracing` debug events (target `gosms`) around every attempt.
    pub debug: bool,
    /// Deadline for a single attempt. Must be greater than zero.
    pub timeout: Duration,
    /// Maximum number of attempts per call; `1` disables retrying, `0` is treated as `1`.
    pub retries: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            retries: 1,
        }
    }
}

impl ClientOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout.is_zero() {
            return Err(ValidationError::NotPositive { field: "timeout" });
        }
        Ok(())
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retries.max(1),
            attempt_timeout: self.timeout,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`GoSmsClient`].
///
/// Use this when you need to customize the base URL, retries, timeout, or user-agent.
pub struct GoSmsClientBuilder {
    api_key: ApiKey,
    base_url: String,
    options: ClientOptions,
    user_agent: Option<String>,
}

impl GoSmsClientBuilder {
    /// Create a builder with the default base URL and [`ClientOptions::default`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            options: ClientOptions::default(),
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.gosms.ge/api/`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace all operational options at once.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable debug tracing.
    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Set the maximum number of attempts per call.
    pub fn retries(mut self, retries: u32) -> Self {
        self.options.retries = retries;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`GoSmsClient`].
    pub fn build(self) -> Result<GoSmsClient, GoSmsError> {
        self.options.validate()?;
        let base_url = parse_base_url(&self.base_url)?.into();

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| GoSmsError::Transport(Box::new(err)))?;

        Ok(GoSmsClient {
            api_key: self.api_key,
            base_url,
            options: self.options,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level GOSMS.ge client.
///
/// Every operation validates its arguments, builds a JSON payload (always carrying
/// `api_key`), and POSTs it to `https://api.gosms.ge/api/<endpoint>`. Failed attempts
/// are retried up to [`ClientOptions::retries`] times with a 1s, 2s, 4s, ... backoff.
///
/// The client is cheap to clone and can be shared between concurrent tasks; its
/// configuration is read-only.
pub struct GoSmsClient {
    api_key: ApiKey,
    base_url: String,
    options: ClientOptions,
    http: Arc<dyn HttpTransport>,
}

impl GoSmsClient {
    /// Create a client with default options.
    ///
    /// Fails if `api_key` is empty or blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with explicit [`ClientOptions`].
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ValidationError> {
        let api_key = ApiKey::new(api_key)?;
        options.validate()?;
        Ok(Self::from_parts(api_key, options))
    }

    /// Create a client from the `GOSMS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ValidationError> {
        Ok(Self::from_parts(ApiKey::from_env()?, ClientOptions::default()))
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> GoSmsClientBuilder {
        GoSmsClientBuilder::new(api_key)
    }

    fn from_parts(api_key: ApiKey, options: ClientOptions) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            options,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Send one SMS (`sendsms`).
    ///
    /// Errors:
    /// - [`GoSmsError::Validation`] if `phone`, `text` or `sender` is blank (no request is sent),
    /// - [`GoSmsError::Api`] with the gateway's `{errorCode, message}` on non-2xx responses,
    /// - transport, timeout and parse failures once the attempt budget is spent.
    pub async fn send(
        &self,
        phone: &str,
        text: &str,
        sender: &str,
        options: SendOptions,
    ) -> Result<SendSmsResponse, GoSmsError> {
        let request = SendSms::new(
            PhoneNumber::new(phone)?,
            MessageText::new(text)?,
            SenderName::new(sender)?,
            options,
        );
        self.execute(
            Endpoint::SendSms,
            transport::encode_send_sms_payload(&request),
            transport::decode_send_sms_json_response,
        )
        .await
    }

    /// Send the same text to several recipients (`sendbulk`).
    ///
    /// `phones` must not be empty. A 2xx answer is a success even when individual
    /// items failed; inspect [`SendBulkSmsResponse::failed`] for those.
    pub async fn send_bulk<I, P>(
        &self,
        sender: &str,
        phones: I,
        text: &str,
        options: BulkOptions,
    ) -> Result<SendBulkSmsResponse, GoSmsError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let from = SenderName::new(sender)?;
        let recipients = phones
            .into_iter()
            .map(PhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;
        let request = SendBulkSms::new(from, recipients, MessageText::new(text)?, options)?;
        self.execute(
            Endpoint::SendBulk,
            transport::encode_send_bulk_payload(&request),
            transport::decode_send_bulk_json_response,
        )
        .await
    }

    /// Send a one-time password to `phone` (`otp/send`). Keep the returned hash for
    /// [`GoSmsClient::verify_otp`].
    pub async fn send_otp(&self, phone: &str) -> Result<OtpSendResponse, GoSmsError> {
        let request = SendOtp::new(PhoneNumber::new(phone)?);
        self.execute(
            Endpoint::SendOtp,
            transport::encode_send_otp_payload(&request),
            transport::decode_otp_send_json_response,
        )
        .await
    }

    /// Check a code entered by the user (`otp/verify`).
    ///
    /// A wrong code is not an error: the call succeeds with `verify == false`.
    pub async fn verify_otp(
        &self,
        phone: &str,
        hash: &str,
        code: &str,
    ) -> Result<OtpVerifyResponse, GoSmsError> {
        let request = VerifyOtp::new(
            PhoneNumber::new(phone)?,
            OtpHash::new(hash)?,
            OtpCode::new(code)?,
        );
        self.execute(
            Endpoint::VerifyOtp,
            transport::encode_verify_otp_payload(&request),
            transport::decode_otp_verify_json_response,
        )
        .await
    }

    /// Delivery status of a sent message (`checksms`).
    pub async fn status(&self, message_id: &str) -> Result<CheckStatusResponse, GoSmsError> {
        let request = CheckStatus::new(MessageId::new(message_id)?);
        self.execute(
            Endpoint::CheckStatus,
            transport::encode_check_status_payload(&request),
            transport::decode_check_status_json_response,
        )
        .await
    }

    /// Account balance (`sms-balance`).
    pub async fn balance(&self) -> Result<BalanceResponse, GoSmsError> {
        self.execute(
            Endpoint::Balance,
            transport::encode_balance_payload(),
            transport::decode_balance_json_response,
        )
        .await
    }

    /// Register a new sender name (`sender`). Names need approval before use.
    pub async fn create_sender(&self, name: &str) -> Result<SenderCreateResponse, GoSmsError> {
        let request = CreateSender::new(SenderName::new(name)?);
        self.execute(
            Endpoint::CreateSender,
            transport::encode_create_sender_payload(&request),
            transport::decode_sender_create_json_response,
        )
        .await
    }

    async fn execute<T>(
        &self,
        endpoint: Endpoint,
        mut payload: Map<String, Value>,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<T, GoSmsError> {
        payload.insert(
            ApiKey::FIELD.to_owned(),
            Value::from(self.api_key.as_str()),
        );
        let url = self.endpoint_url(endpoint)?;
        let body = Value::Object(payload).to_string();
        let call = Call {
            endpoint,
            url: url.as_str(),
            body: &body,
        };

        retry::execute(
            self.http.as_ref(),
            &call,
            &self.options.retry_policy(),
            self.options.debug,
            decode,
        )
        .await
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, GoSmsError> {
        let mut url = Url::parse(&self.base_url)?.join(endpoint.path())?;
        if endpoint.api_key_in_query() {
            url.query_pairs_mut()
                .append_pair(ApiKey::FIELD, self.api_key.as_str());
        }
        Ok(url)
    }
}

/// Endpoint paths are joined relative to the base, so its path must end in `/`.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
