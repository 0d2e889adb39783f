//! Request orchestration: per-attempt deadline, exponential backoff, debug tracing.

use std::time::Duration;

use tracing::debug;

use super::{GoSmsError, HttpTransport};
use crate::transport::{Endpoint, TransportError, decode_api_error_json_response};

const BACKOFF_BASE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RetryPolicy {
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
}

/// One logical request, shared by all of its attempts.
#[derive(Debug, Clone, Copy)]
pub(super) struct Call<'a> {
    pub endpoint: Endpoint,
    pub url: &'a str,
    pub body: &'a str,
}

/// Delay inserted after failed attempt number `attempt` (1-based): 1s, 2s, 4s, ...
pub(super) fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    BACKOFF_BASE.saturating_mul(factor)
}

/// Run `call` until it succeeds or the attempt budget is spent.
///
/// Returns the first decoded success, or the failure of the last attempt.
pub(super) async fn execute<T, D>(
    http: &dyn HttpTransport,
    call: &Call<'_>,
    policy: &RetryPolicy,
    debug: bool,
    decode: D,
) -> Result<T, GoSmsError>
where
    D: Fn(&str) -> Result<T, TransportError>,
{
    let max_attempts = policy.max_attempts.max(1);
    let endpoint = call.endpoint.path();
    let mut attempt = 1;

    loop {
        if debug {
            debug!(target: "gosms", endpoint, attempt, max_attempts, "sending request");
        }

        let err = match attempt_once(http, call, policy.attempt_timeout, debug, &decode).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if debug {
            debug!(target: "gosms", endpoint, attempt, error = %err, "request failed");
        }
        if attempt >= max_attempts || !err.is_retryable() {
            return Err(err);
        }

        let delay = backoff_delay(attempt);
        if debug {
            debug!(
                target: "gosms",
                endpoint,
                attempt,
                delay = ?delay,
                "retrying after backoff"
            );
        }
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

async fn attempt_once<T, D>(
    http: &dyn HttpTransport,
    call: &Call<'_>,
    timeout: Duration,
    debug: bool,
    decode: &D,
) -> Result<T, GoSmsError>
where
    D: Fn(&str) -> Result<T, TransportError>,
{
    // The deadline lives inside this future and is dropped with it.
    let response = tokio::time::timeout(timeout, http.post_json(call.url, call.body.to_owned()))
        .await
        .map_err(|_| GoSmsError::Timeout { after: timeout })?
        .map_err(GoSmsError::Transport)?;

    if !(200..=299).contains(&response.status) {
        let error = decode_api_error_json_response(&response.body)
            .map_err(|err| GoSmsError::Parse(Box::new(err)))?;
        return Err(GoSmsError::Api {
            status: response.status,
            error,
        });
    }

    // Past this point the gateway has accepted the request; a body that is JSON but
    // not the expected shape must not trigger another POST.
    let value = decode(&response.body).map_err(|err| {
        if err.is_malformed_json() {
            GoSmsError::Parse(Box::new(err))
        } else {
            GoSmsError::Decode(Box::new(err))
        }
    })?;
    if debug {
        debug!(
            target: "gosms",
            endpoint = call.endpoint.path(),
            status = response.status,
            body = %response.body,
            "request succeeded"
        );
    }
    Ok(value)
}
