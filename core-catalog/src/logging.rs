//! Logging Initialization
//!
//! Thin `tracing-subscriber` setup for hosts that do not bring their own
//! subscriber. Library code only emits through `tracing` macros; calling
//! this is optional.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, SetupError};

/// Initialize the logging system.
///
/// `filter` takes the usual env-filter syntax (e.g.
/// `"core_catalog=debug,provider_youtube=debug"`); when `None`, the
/// `RUST_LOG` environment variable is honored with an `info` fallback.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| SetupError::Config(format!("Invalid log filter: {}", e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| SetupError::Config(format!("Failed to initialize logging: {}", e)))
}
