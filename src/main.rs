use coursehub::server::{config::Config, model::app::AppState, router, service::image::ImageStore, startup};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer();
    let db = startup::connect_to_database(&config).await.unwrap();

    let state = AppState {
        db,
        images: ImageStore::new(&config.upload_dir),
    };

    let router = router::routes().with_state(state).layer(session);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();

    info!("Starting server on {}", address);

    axum::serve(listener, router).await.unwrap();
}
