use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voyager_api::{app, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voyager_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = voyager_api::app_config::Settings::load().expect("Failed to load config");
    tracing::info!("Starting Voyager API on port {}", settings.server.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    let state = AppState::new(settings);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(state)).await.expect("Server error");
}
