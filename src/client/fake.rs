//! Scripted in-memory transport for client tests.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub(super) enum FakeReply {
    Respond { status: u16, body: String },
    Fail(String),
    /// Never completes; only the attempt deadline ends it.
    Hang,
}

impl FakeReply {
    pub(super) fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::Respond {
            status,
            body: body.into(),
        }
    }

    pub(super) fn fail(message: &str) -> Self {
        Self::Fail(message.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RecordedRequest {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    replies: VecDeque<FakeReply>,
    requests: Vec<RecordedRequest>,
}

impl FakeTransport {
    pub(super) fn new(replies: Vec<FakeReply>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                replies: replies.into(),
                requests: Vec::new(),
            })),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(super) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(super) fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

impl HttpTransport for FakeTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let reply = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest {
                    url: url.to_owned(),
                    body,
                });
                state
                    .replies
                    .pop_front()
                    .unwrap_or_else(|| FakeReply::fail("no scripted reply left"))
            };

            match reply {
                FakeReply::Respond { status, body } => Ok(HttpResponse { status, body }),
                FakeReply::Fail(message) => {
                    Err(Box::new(io::Error::other(message)) as Box<dyn StdError + Send + Sync>)
                }
                FakeReply::Hang => std::future::pending().await,
            }
        })
    }
}
