use std::process::ExitCode;

use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use station_server::cache::CachedStadaClient;
use station_server::config::ServerConfig;
use station_server::fasta::FastaClient;
use station_server::stada::StadaClient;
use station_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_server=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let stada = StadaClient::new(&config.api)?;
    let fasta = FastaClient::new(&config.api)?;
    let stations = CachedStadaClient::new(stada, &config.cache);

    info!(
        endpoint = %config.api.base_url,
        cache = config.cache.is_enabled(),
        page_size = config.listing.page_size,
        batch_size = config.listing.batch_size,
        "upstream configured"
    );

    let state = AppState::new(stations, fasta, config.listing.clone());
    let app = create_router(state, &config.static_dir).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Station browser listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
