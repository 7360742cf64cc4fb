use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use comic_press::config::Config;
use comic_press::service::ContentService;
use comic_press::state::AppState;
use comic_press::store::SqliteStore;
use comic_press::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let pool = db::init_db(&config.database_url).await?;

    let store = Arc::new(SqliteStore::new(pool));
    let state = AppState {
        service: Arc::new(ContentService::new(store)),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
