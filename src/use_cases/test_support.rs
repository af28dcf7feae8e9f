use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{CardRegistry, RegistryError, RequestClient, RequestError, ResponseEnvelope};

// A single request observed by the scripted client.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: String,
    pub params: Vec<(String, String)>,
}

// What the scripted client answers with.
#[derive(Clone, Debug)]
pub(crate) enum ScriptedResponse {
    Body(String),
    Delayed { delay: Duration, body: String },
    BadStatus,
}

impl ScriptedResponse {
    pub(crate) fn body(body: &str) -> Self {
        ScriptedResponse::Body(body.to_string())
    }

    pub(crate) fn delayed(delay: Duration, body: &str) -> Self {
        ScriptedResponse::Delayed {
            delay,
            body: body.to_string(),
        }
    }
}

// Request client fake that records calls and replays queued responses. The last
// response is repeated once the queue runs dry.
#[derive(Clone)]
pub(crate) struct ScriptedClient {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<Vec<ScriptedResponse>>>,
}

impl ScriptedClient {
    pub(crate) fn new(response: ScriptedResponse) -> Self {
        Self::sequence(vec![response])
    }

    pub(crate) fn sequence(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(responses)),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn next_response(&self) -> ScriptedResponse {
        let mut guard = self.responses.lock().expect("responses mutex poisoned");
        if guard.len() > 1 {
            guard.remove(0)
        } else {
            guard.first().cloned().expect("scripted client needs a response")
        }
    }
}

#[async_trait]
impl RequestClient for ScriptedClient {
    async fn request(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<ResponseEnvelope, RequestError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(RecordedCall {
                method: method.to_string(),
                params: params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            });

        let body = match self.next_response() {
            ScriptedResponse::Body(body) => body,
            ScriptedResponse::Delayed { delay, body } => {
                tokio::time::sleep(delay).await;
                body
            }
            ScriptedResponse::BadStatus => {
                return Err(RequestError::Status(StatusCode::BAD_GATEWAY));
            }
        };
        ResponseEnvelope::parse(&body)?.into_result()
    }
}

// Card registry fake backed by a fixed set, optionally failing every lookup.
#[derive(Clone, Default)]
pub(crate) struct FixedRegistry {
    cards: HashSet<String>,
    fail: bool,
}

impl FixedRegistry {
    pub(crate) fn with_cards(cards: &[&str]) -> Self {
        Self {
            cards: cards.iter().map(|card| card.to_string()).collect(),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            cards: HashSet::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CardRegistry for FixedRegistry {
    async fn is_registered(&self, card: &str) -> Result<bool, RegistryError> {
        if self.fail {
            return Err(RegistryError::Unavailable("lookup failed".to_string()));
        }
        Ok(self.cards.contains(card))
    }
}
