use serde::{Deserialize, Deserializer};

use crate::domain::errors::RequestError;

/// Top-level JSON object returned by `/request/{method}`.
///
/// Decoding is strict about shapes: a field of the wrong type is a
/// [`RequestError::MalformedResponse`] instead of being coerced. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Boolean-like flag; `true`, a non-empty string or a non-zero number.
    #[serde(default, deserialize_with = "truthy_flag")]
    pub success: bool,
    /// Server-side failure message. Empty strings are treated as absent.
    #[serde(default, deserialize_with = "non_empty_message")]
    pub error: Option<String>,
    /// Validity payload of the `validate` method.
    #[serde(default)]
    pub is_valid: Option<ValidityFlag>,
}

/// `is_valid` as it travels on the wire.
///
/// The canonical form is a string holding a JSON boolean, decoded a second time.
/// A flat boolean is accepted for servers that never double-encoded it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValidityFlag {
    Flat(bool),
    Encoded(String),
}

impl ValidityFlag {
    pub fn decode(&self) -> Result<bool, RequestError> {
        match self {
            ValidityFlag::Flat(value) => Ok(*value),
            ValidityFlag::Encoded(raw) => serde_json::from_str::<bool>(raw.trim()).map_err(|err| {
                RequestError::MalformedResponse(format!("is_valid is not a JSON boolean: {err}"))
            }),
        }
    }
}

/// Double-encodes a validity flag the way `ValidityFlag::Encoded` expects it.
pub fn encode_validity(is_valid: bool) -> String {
    if is_valid { "true" } else { "false" }.to_string()
}

impl ResponseEnvelope {
    /// Strictly parses a response body.
    pub fn parse(body: &str) -> Result<Self, RequestError> {
        serde_json::from_str(body).map_err(|err| RequestError::MalformedResponse(err.to_string()))
    }

    /// Applies the usability rule: `error` wins over everything, then `success`
    /// must be set.
    pub fn into_result(self) -> Result<Self, RequestError> {
        if let Some(message) = &self.error {
            return Err(RequestError::Server(message.clone()));
        }
        if self.success {
            return Ok(self);
        }
        Err(RequestError::UndefinedResponse)
    }

    /// Decoded `is_valid`; missing on a usable envelope counts as malformed.
    pub fn validity(&self) -> Result<bool, RequestError> {
        self.is_valid
            .as_ref()
            .ok_or_else(|| RequestError::MalformedResponse("is_valid is missing".to_string()))?
            .decode()
    }
}

fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(value)) => value,
        Some(Flag::Number(value)) => value != 0.0 && !value.is_nan(),
        Some(Flag::Text(value)) => !value.is_empty(),
    })
}

fn non_empty_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|message| !message.is_empty()))
}
