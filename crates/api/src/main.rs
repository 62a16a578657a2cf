use anyhow::Context;

use peptides_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    peptides_observability::init();

    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr;

    if !config.catalog_path.exists() {
        tracing::warn!(
            path = %config.catalog_path.display(),
            "catalog file not found; pages will render without products"
        );
    }

    let app = peptides_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
