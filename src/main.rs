use std::sync::Arc;

use fin_assist::api::{AssistantApi, AssistantClient};
use fin_assist::chat::AppState;
use fin_assist::config::ClientConfig;
use fin_assist::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env()?;

    eprintln!("💰 Fin Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.base_url);
    eprintln!("   Commands: /advice /product /credit /profile /back /quit");
    eprintln!("   Type a question and press Enter.\n");

    let api: Arc<dyn AssistantApi> = Arc::new(AssistantClient::new(&config));
    let state = Arc::new(tokio::sync::Mutex::new(AppState::new()));

    ui::run(api, state).await;

    Ok(())
}
