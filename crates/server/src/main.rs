use server::AppState;
use std::{path::Path, sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tripline::prelude::*;

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");
    let stops = match std::env::args().nth(1) {
        Some(path) => {
            let now = Instant::now();
            let source = if Path::new(&path).extension().is_some_and(|ext| ext == "zip") {
                StopSource::default().from_zip(&path)
            } else {
                StopSource::default().from_csv(&path)
            };
            match source.load_stops() {
                Ok(stops) => {
                    info!("Loading stops took {:?}", now.elapsed());
                    stops
                }
                Err(err) => {
                    error!("Failed to load stops from {path}: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No stops file given, serving without preloaded stops");
            Vec::new()
        }
    };

    let state = Arc::new(AppState::new(RouteEstimator::new(), stops));
    let app = server::app(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
