//! Construction configuration for the bundler.
//!
//! [`BundlerConfig::from_env`] layers `LOGBUNDLER_*` environment variables
//! over the embedded defaults. The core never reads the process
//! environment itself — environment lookup belongs to the composition
//! root that constructs the bundler. [`BundlerConfig::defaults`] returns
//! the same defaults without touching the environment (useful in tests).

use serde::Deserialize;
use std::sync::Arc;

use crate::sink::LogSink;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
verbose     = false
environment = "development"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Dispatcher-facing configuration, fixed at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct BundlerConfig {
    /// In production-like environments, emit the expanded `verbose-<level>`
    /// label and full detail instead of the compact shape.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Environment label selecting the dispatch branch. `development`/`dev`
    /// always emit, `test`/`testing` never emit, anything else is treated
    /// as production-like.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_verbose() -> bool {
    false
}
fn default_environment() -> String {
    "development".to_string()
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl BundlerConfig {
    /// Layer `LOGBUNDLER_VERBOSE` and `LOGBUNDLER_ENVIRONMENT` over the
    /// embedded defaults.
    ///
    /// Call this from the composition root, not from request-handling
    /// code; a constructed bundler never consults the environment again.
    pub fn from_env() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(
                config::Environment::with_prefix("LOGBUNDLER").try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the embedded defaults without touching the process
    /// environment.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Construction options
// ---------------------------------------------------------------------------

/// Construction surface for [`LogBundler`](crate::LogBundler).
#[derive(Clone, Default)]
pub struct BundlerOptions {
    /// Recorded as `request-id` under `info` at construction when present.
    pub correlation_id: Option<String>,
    /// Dispatcher configuration.
    pub config: BundlerConfig,
    /// Injected sink; [`ConsoleSink`](crate::ConsoleSink) is used when
    /// absent.
    pub sink: Option<Arc<dyn LogSink>>,
}

impl BundlerOptions {
    /// Options carrying a correlation id, with defaults everywhere else.
    pub fn with_correlation_id(id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(id.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = BundlerConfig::defaults();
        assert!(!cfg.verbose);
        assert_eq!(cfg.environment, "development");
    }

    #[test]
    fn env_layer_overrides_defaults() {
        std::env::set_var("LOGBUNDLER_ENVIRONMENT", "production");
        std::env::set_var("LOGBUNDLER_VERBOSE", "true");
        let cfg = BundlerConfig::from_env().unwrap();
        std::env::remove_var("LOGBUNDLER_ENVIRONMENT");
        std::env::remove_var("LOGBUNDLER_VERBOSE");
        assert!(cfg.verbose);
        assert_eq!(cfg.environment, "production");
    }
}
