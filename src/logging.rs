//! Structured logging setup.
//!
//! The library only emits `tracing` events. Binaries, demos and simulation
//! harnesses call [`init_logging`] once to get console output filtered by
//! `TL_AUTOMATON_LOG` (falling back to `RUST_LOG`, then `info`).

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "TL_AUTOMATON_LOG";

const DEFAULT_FILTER: &str = "info";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging. Safe to call more than once.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = log_filter();

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(&filter)),
        );

        // Another subscriber (test harness, host application) may already be set.
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
            return;
        }

        tracing::info!(filter = %filter, "Logging initialized");
    });
}

/// Resolve the filter directive from the environment.
pub fn log_filter() -> String {
    filter_from(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var("RUST_LOG").ok(),
    )
}

fn filter_from(own: Option<String>, fallback: Option<String>) -> String {
    own.into_iter()
        .chain(fallback)
        .map(|directive| directive.trim().to_string())
        .find(|directive| !directive.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_variable_wins() {
        let filter = filter_from(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        assert_eq!(filter_from(None, Some("warn".into())), "warn");
        assert_eq!(filter_from(Some("  ".into()), Some("trace".into())), "trace");
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(filter_from(None, None), "info");
    }

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
    }
}
