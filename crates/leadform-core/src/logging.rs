//! Tracing subscriber setup shared by the binaries.
//!
//! `RUST_LOG` takes precedence; otherwise the filter passed in is used.
//!
//! ```ignore
//! leadform_core::logging::init_logging("leadform=debug,info")?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Filter used when neither `RUST_LOG` nor a CLI filter is given
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter: `RUST_LOG` if set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(fallback)?),
    }
}

/// Install the global fmt subscriber.
///
/// Fails if a subscriber is already installed or the filter is malformed.
pub fn init_logging(fallback: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback)?)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
    Ok(())
}
