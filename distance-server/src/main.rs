use distance_server::calculate::OrsCalculator;
use distance_server::config::AppConfig;
use distance_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    // Resolved once; the clients get it explicitly from here on
    let credential = config.credential_source().resolve();
    if credential.is_missing() {
        warn!(
            secrets = %config.secrets_path.display(),
            "ORS_API_KEY not set. Calculations are disabled until it is configured."
        );
    }

    let calculator = match OrsCalculator::from_config(&config.ors_config(credential)) {
        Ok(calculator) => calculator,
        Err(e) => {
            error!("failed to create OpenRouteService clients: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(calculator);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Road distance calculator listening on http://{}", config.bind_addr);
    info!("Endpoints: GET / (page), POST /calculate (form), POST /api/route (JSON), GET /health");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
