// Interface adapters: HTTP client, host fields and the `/request/*` service.

pub mod clients;
pub mod fields;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod widgets;
