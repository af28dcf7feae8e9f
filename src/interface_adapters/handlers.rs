use crate::domain::encode_validity;
use crate::interface_adapters::protocol::{
    ErrorResponse, PingResponse, ValidateQuery, ValidateResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::validate_card::{ValidateCardError, ValidateCardUseCase};
use axum::{
    Json,
    extract::{Path, RawQuery, State},
    response::{IntoResponse, Response},
};

// Dispatches `GET /request/{method}`. Failures travel inside the envelope, so
// every answer is a 200.
#[tracing::instrument(name = "form_request", skip_all, fields(method = %method))]
pub async fn handle_request(
    State(state): State<AppState>,
    Path(method): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    match method.as_str() {
        "test" => Json(PingResponse { success: "OK" }).into_response(),
        "validate" => validate_card(state, ValidateQuery::from_raw(query.as_deref())).await,
        _ => {
            tracing::debug!("unknown request method.");
            error_response("not_found")
        }
    }
}

async fn validate_card(state: AppState, query: ValidateQuery) -> Response {
    let use_case = ValidateCardUseCase {
        registry: state.registry.clone(),
    };

    match use_case.execute(query.card).await {
        Ok(result) => Json(ValidateResponse {
            success: true,
            is_valid: encode_validity(result.is_valid),
        })
        .into_response(),
        Err(ValidateCardError::MissingCard) => error_response("missing_card"),
        Err(ValidateCardError::Registry(err)) => {
            tracing::error!(error = %err, "card registry lookup failed.");
            error_response("registry_unavailable")
        }
    }
}

// Helper to build an error-only envelope.
fn error_response(error: &str) -> Response {
    Json(ErrorResponse {
        error: error.to_string(),
    })
    .into_response()
}
