//! Log setup for the dashboard binary and for hosts embedding the engine.
//!
//! Nothing is installed implicitly. Hosts with their own subscriber skip this
//! module; the engine only emits `tracing` events.

/// Filter applied when `RUST_LOG` is unset: dashboard events at `info`, the
/// HTTP stack only when it warns.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=warn,hyper=warn";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_LOG_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive.
///
/// An unparsable `fallback` installs nothing and returns `false`.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use super::DEFAULT_LOG_FILTER;

    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
