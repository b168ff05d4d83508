//! Tracing setup for binaries embedding `honeydash`.
//!
//! The library only emits `tracing` events. Hosts either call
//! [`init_default_tracing`] or install their own subscriber.

/// Installs a compact fmt subscriber when the `telemetry` feature is enabled.
///
/// `default_level` is used unless `RUST_LOG` is set. Returns `false` when
/// the feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing(default_level: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        builder.try_init().is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_level;
        false
    }
}
