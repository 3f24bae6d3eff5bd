use anyhow::Context;

use cart_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cart_api_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(?config, "configuration loaded");

    let fixtures = config.load_fixtures().context("failed to load fixtures")?;
    let app = cart_api::app::build_app(&config, fixtures);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
