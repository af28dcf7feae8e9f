use crate::interface_adapters::handlers::handle_request;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/request/{method}", get(handle_request))
        .with_state(state)
}
