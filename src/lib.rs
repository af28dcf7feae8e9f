pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{http_port, request_base_url, request_timeout};
pub use frameworks::server::{build_request_client, run, run_with_config};
