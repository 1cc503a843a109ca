//! Opt-in tracing bootstrap.
//!
//! Nothing here runs unless the host asks for it: embedders either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Installs a compact `info`-level subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or another
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
