#[tokio::main]
async fn main() {
    if let Err(e) = card_form::run_with_config().await {
        tracing::error!(error = %e, "card form service stopped");
        std::process::exit(1);
    }
}
