use reqwest::StatusCode;
use std::fmt;

// Every way a `/request/*` call can end without a usable envelope.
// Callers treat all of them as an indeterminate result, never as "invalid".
#[derive(Debug)]
pub enum RequestError {
    Transport(reqwest::Error),
    Status(StatusCode),
    MalformedResponse(String),
    Server(String),
    UndefinedResponse,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(err) => write!(f, "request transport error: {err}"),
            RequestError::Status(status) => write!(f, "request failed with status {status}"),
            RequestError::MalformedResponse(reason) => write!(f, "malformed response: {reason}"),
            RequestError::Server(message) => write!(f, "server side error: {message}"),
            RequestError::UndefinedResponse => write!(f, "undefined response"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

// Server-side failures of the card registry lookup.
#[derive(Debug)]
pub enum RegistryError {
    Unavailable(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unavailable(reason) => write!(f, "card registry unavailable: {reason}"),
        }
    }
}

impl std::error::Error for RegistryError {}
