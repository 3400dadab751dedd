use axum_helpers::TokenConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=3000
        let token = TokenConfig::from_env()?; // Required - will fail if TOKEN_SECRET is not set

        Ok(Self {
            app: app_info!(),
            server,
            token,
            environment,
        })
    }
}
