//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only verdicts. `RUST_LOG` overrides
//! the configured `log_filter`.

use crate::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

/// Build the filter for this run: `RUST_LOG` if set and valid, else the config.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// A second call is a no-op: `try_init` refuses to replace an existing
/// subscriber and the error is ignored.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard(Option<String>);

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let original = std::env::var("RUST_LOG").ok();
            // SAFETY: tests touching RUST_LOG are #[serial]; no other thread reads it meanwhile.
            unsafe {
                match value {
                    Some(v) => std::env::set_var("RUST_LOG", v),
                    None => std::env::remove_var("RUST_LOG"),
                }
            }
            Self(original)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match &self.0 {
                    Some(v) => std::env::set_var("RUST_LOG", v),
                    None => std::env::remove_var("RUST_LOG"),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn filter_falls_back_to_config() {
        let _guard = EnvGuard::set(None);
        let config = Config {
            log_filter: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string(), "debug");
    }

    #[test]
    #[serial]
    fn rust_log_overrides_config() {
        let _guard = EnvGuard::set(Some("error"));
        let config = Config {
            log_filter: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string(), "error");
    }

    #[test]
    #[serial]
    fn init_twice_does_not_panic() {
        let _guard = EnvGuard::set(None);
        let config = Config::default();
        init(&config);
        init(&Config {
            log_format: LogFormat::Json,
            ..Default::default()
        });
        tracing::info!("logging initialized in test");
    }
}
