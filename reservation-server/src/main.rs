use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use reservation_server::config::ServerConfig;
use reservation_server::store::{BookingReferenceGenerator, TrainStore};
use reservation_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides; default is info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast if the seed data is unusable
    let store = match TrainStore::load(&config.trains_file) {
        Ok(store) => store,
        Err(e) => {
            error!(path = %config.trains_file.display(), error = %e, "Failed to load train data");
            return ExitCode::FAILURE;
        }
    };
    let trains = store.train_ids().map(|ids| ids.len()).unwrap_or_default();
    info!(trains, path = %config.trains_file.display(), "Loaded train data");

    let state = AppState::new(
        store,
        BookingReferenceGenerator::new(config.reference_seed),
        config.policy,
    );
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %config.bind_addr,
        max_occupancy_percent = config.policy.max_occupancy_percent,
        count_incoming_party = config.policy.count_incoming_party,
        "Reservation server listening"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutting down");
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
