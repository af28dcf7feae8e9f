use serde::Serialize;

// Query string of `GET /request/validate`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidateQuery {
    // Card number exactly as typed by the user.
    pub card: Option<String>,
}

impl ValidateQuery {
    // Lenient parse of the raw query: a repeated `card` keeps its first value and
    // unknown keys are ignored, so no query string can be rejected here.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let card = raw.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "card")
                .map(|(_, value)| value.into_owned())
        });
        Self { card }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    // JSON boolean encoded as a string; clients decode it a second time.
    pub is_valid: String,
}

// Liveness answer of `GET /request/test`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub success: &'static str,
}

// Envelope carrying only an error. Always sent with HTTP 200.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
