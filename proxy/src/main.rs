use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphx_proxy::{app::build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphx_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        listen_addr = %config.listen_addr,
        target = %config.target,
        static_dir = %config.static_dir.display(),
        change_origin = config.change_origin,
        verify_tls = config.verify_tls,
        rules = ?config.rules,
        "Loaded configuration from environment/.env"
    );
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "No index.html in static dir; build the frontend first"
        );
    }

    let addr = config.listen_addr;
    let app = build_router(AppState::new(config)?);

    tracing::info!("Dev server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
