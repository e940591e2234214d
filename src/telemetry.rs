//! Tracing subscriber setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Filter from `RUST_LOG` when set, otherwise from `server.log_level`.
pub fn env_filter(server: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level))
}

/// Installs the global subscriber: JSON lines in production, human-readable
/// output everywhere else.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(server));

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}
