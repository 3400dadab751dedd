use axum_helpers::JwtAuth;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserRepository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // The user collection is memory-resident: it starts empty on every
    // boot and is lost on shutdown.
    let repository = InMemoryUserRepository::new();
    let jwt_auth = JwtAuth::new(&config.token);

    let state = AppState {
        config,
        repository,
        jwt_auth,
    };

    if state.config.environment.is_development() {
        seed::seed_dev_users(&state).await?;
    }

    // Build router with API routes (state is applied per domain router)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge the /health liveness endpoint with app name/version
    let app = router.merge(health_router(state.config.app));

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
