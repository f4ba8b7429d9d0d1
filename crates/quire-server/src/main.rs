use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use quire_server::config::{Config, StoreKind};
use quire_server::state::AppState;
use quire_storage::memory::MemoryStore;
use quire_storage::store::{ObjectStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn ObjectStore> = match config.store {
        StoreKind::S3 => {
            let s3 = quire_storage::client::build_client().await;
            tracing::info!(bucket = %config.bucket, "using S3 document store");
            Arc::new(S3Store::new(s3, config.bucket.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory document store, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let app = quire_server::app(AppState::new(store), &config.mount_path);

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        mount = %config.mount_path,
        "listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
