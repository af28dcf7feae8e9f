use std::{env, time::Duration};

// Runtime configuration, read from the environment (and `.env` via dotenvy).

pub fn http_port() -> u16 {
    env::var("CARD_FORM_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3003)
}

pub fn request_base_url() -> String {
    env::var("REQUEST_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3003".to_string())
}

// Unset or unparsable means no timeout.
pub fn request_timeout() -> Option<Duration> {
    env::var("REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

pub fn registered_cards() -> Vec<String> {
    env::var("REGISTERED_CARDS")
        .map(|value| parse_card_list(&value))
        .unwrap_or_default()
}

fn parse_card_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|card| !card.is_empty())
        .map(str::to_string)
        .collect()
}
