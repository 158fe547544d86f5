//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install a global fmt subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter falls back to `info`.
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_noop() {
        let config = ObservabilityConfig {
            filter: "debug".to_string(),
            format: LogFormat::Compact,
        };
        init_with(&config);
        init_with(&config);
        ::tracing::info!("still logging after second init");
    }

    #[test]
    fn bad_filter_falls_back_instead_of_panicking() {
        let config = ObservabilityConfig {
            filter: "[[not a filter".to_string(),
            format: LogFormat::Json,
        };
        init_with(&config);
    }
}
