//! Server binary wiring the task store to its HTTP boundary.
//!
//! Lifecycle is explicit: initialize logging, load settings, build the
//! connection pool, construct the repository and store once, then serve
//! until the process exits.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use taskstore::config::Settings;
use taskstore::http::{AppState, router};
use taskstore::task::adapters::postgres::PostgresTaskRepository;
use taskstore::task::services::TaskStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    let manager = ConnectionManager::<PgConnection>::new(&settings.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let store = Arc::new(TaskStore::new(repository, Arc::new(DefaultClock)));
    let app = router(AppState::new(store));

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
