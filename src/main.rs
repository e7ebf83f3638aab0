use kb_chat::api::{create_router, AppState};
use kb_chat::domain::ports::SnapshotStore;
use kb_chat::infrastructure::{AppConfig, InMemorySnapshotStore, JsonSnapshotStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,kb_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let store: Arc<dyn SnapshotStore> = match &config.config.storage.data_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Persisting snapshots to disk");
            Arc::new(JsonSnapshotStore::new(dir))
        }
        None => {
            info!("No data_dir configured, snapshots kept in memory");
            Arc::new(InMemorySnapshotStore::new())
        }
    };

    let addr = SocketAddr::new(
        config.config.server.host.parse()?,
        config.config.server.port,
    );

    let state = AppState::load(store, config).await?;
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
