//! Tracing subscriber setup.

use immerse_core::config::GeneralConfig;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered at `general.log_level`, writing JSON
/// lines when `general.log_format` is `"json"` and plain text otherwise.
///
/// `RUST_LOG`, when set, takes precedence. Calling this more than once (or
/// after another subscriber was installed) is harmless; returns whether this
/// call installed the subscriber.
pub fn init_tracing(general: &GeneralConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.as_str()));

    if general.wants_json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_harmless() {
        let general = GeneralConfig::default();
        let _ = init_tracing(&general);
        assert!(!init_tracing(&general));
    }

    #[test]
    fn json_format_installs_at_most_once() {
        let general = GeneralConfig { log_format: "json".to_string(), ..GeneralConfig::default() };
        assert!(general.wants_json_logs());
        let _ = init_tracing(&general);
        assert!(!init_tracing(&general));
    }
}
