use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vox_server::{ServerConfig, create_app};
use vox_session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    let store = Arc::new(SessionStore::new());
    let registry = vox_tool::full_registry(Arc::clone(&store));
    info!(tools = registry.len(), "tool registry ready");

    if let Some(path) = &config.prompt_path {
        let prompt =
            vox_server::load_prompt_for_account(path, config.account_number.as_deref())
                .with_context(|| format!("loading prompt from {}", path.display()))?;
        info!(bytes = prompt.len(), "system prompt loaded");
    }

    let addr = config.bind_addr();
    let app = create_app(&config, store);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "webhook server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
