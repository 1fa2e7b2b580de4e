use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::{store, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,todo_server=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    // A store that cannot be opened at startup is fatal.
    let store = store::open(&config.db).inspect_err(|e| {
        tracing::error!("storage connection error: {e}");
    })?;
    tracing::info!(db = %config.db, "storage connected");

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    todo_server::run(listener, store).await?;
    Ok(())
}
