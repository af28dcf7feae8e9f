use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::domain::{RequestClient, RequestError, ResponseEnvelope};

// Path prefix every form request lives under.
const REQUEST_PREFIX: &str = "request";

// Thin wrapper around reqwest for `/request/{method}` calls.
#[derive(Clone)]
pub struct HttpRequestClient {
    http: Client,
    base_url: Url,
}

#[derive(Debug)]
pub enum ClientBuildError {
    InvalidBaseUrl(String),
    Http(reqwest::Error),
}

impl fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientBuildError::InvalidBaseUrl(reason) => write!(f, "invalid request base url: {reason}"),
            ClientBuildError::Http(err) => write!(f, "failed to build http client: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {}

impl HttpRequestClient {
    // `timeout` of `None` leaves requests unbounded, as a browser AJAX call would be.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientBuildError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientBuildError::InvalidBaseUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl(format!(
                "{base_url} cannot carry a path"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientBuildError::Http)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // `{base}/request/{method}`, with the params as a query string when present.
    pub fn request_url(&self, method: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([REQUEST_PREFIX, method]);
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }
}

#[async_trait]
impl RequestClient for HttpRequestClient {
    #[tracing::instrument(name = "request", skip_all, fields(method = %method))]
    async fn request(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<ResponseEnvelope, RequestError> {
        let url = self.request_url(method, params);
        let res = self.http.get(url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "request transport error.");
            RequestError::Transport(err)
        })?;
        let status = res.status();

        // A non-2xx status lands on the same path as a network failure.
        if !status.is_success() {
            tracing::warn!(%status, "request failed with http status.");
            return Err(RequestError::Status(status));
        }

        let body = res.text().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read response body.");
            RequestError::Transport(err)
        })?;

        let envelope = ResponseEnvelope::parse(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "malformed response.");
        })?;

        envelope.into_result().inspect_err(|err| match err {
            RequestError::Server(message) => {
                tracing::warn!(error = %message, "server side error.");
            }
            _ => tracing::warn!(body = %body, "undefined response."),
        })
    }
}
