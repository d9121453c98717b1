//! Opt-in tracing setup for hosts embedding the engine.
//!
//! The library only emits `tracing` events and never installs a subscriber on
//! its own. Hosts either wire their own subscriber or, with the `telemetry`
//! feature enabled, call [`init_default_tracing`] once at startup.

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting to
/// `info` for this crate when the variable is unset.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed, so calling it unconditionally is safe.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bargraph_rs=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
