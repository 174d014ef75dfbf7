use batepapo::store::Store;
use batepapo::{AppState, presence};
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(dotenv::var("DATABASE_URL").unwrap().as_str())
        .await
        .unwrap();

    let store = Store::new(db_pool);
    store.ensure_schema().await.unwrap();

    // The sweep only starts once the store answered the schema call above.
    let sweeper = tokio::spawn(presence::sweep::run(store.clone()));

    let app = batepapo::app(AppState { store });
    let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
    info!("listening on port 5000");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    sweeper.abort();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
