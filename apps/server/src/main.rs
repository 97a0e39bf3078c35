//! Task API server binary.

use std::net::SocketAddr;

use task_store::{MemoryTaskStore, SqliteTaskStore, TaskStore};
use tasks_server::{config::Config, create_app, create_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(in_memory = config.in_memory, "Starting Task API server");

    if config.in_memory {
        serve(config, MemoryTaskStore::new()).await
    } else {
        let store = SqliteTaskStore::connect(&config.database_url).await?;
        serve(config, store).await
    }
}

/// Binds the listener and runs the server against the given store.
async fn serve<S: TaskStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = create_state(config, store);
    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
