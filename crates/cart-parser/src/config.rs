//! # Parser Configuration
//!
//! Configuration management for the cart parser.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CART_PARSER_MAX_BYTES=1048576                                      │
//! │     CART_PARSER_ID_STRATEGY=sequential                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cart-parser/config.toml (Linux)                          │
//! │     ~/Library/Application Support/com.cart.cart-parser/config.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10 MiB input limit, UUID ids, validation errors logged             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [input]
//! max_bytes = 10485760  # 0 = unlimited
//!
//! [ids]
//! strategy = "uuid"     # uuid | sequential
//! prefix = "item-"      # sequential only
//!
//! [logging]
//! log_validation_errors = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use cart_core::{IdGenerator, SequentialIds, UuidGenerator};

use crate::error::{ParserError, ParserResult};

/// Default input size limit (10 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// Id Strategy
// =============================================================================

/// Which id generator the parser uses for items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random UUID v4 per item.
    #[default]
    Uuid,

    /// `{prefix}1`, `{prefix}2`, ... per parser instance.
    Sequential,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uuid" | "random" => Ok(IdStrategy::Uuid),
            "sequential" | "counter" => Ok(IdStrategy::Sequential),
            other => Err(ParserError::InvalidConfig(format!(
                "Unknown id strategy: '{}'. Valid options: uuid, sequential",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Input limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Largest accepted input in bytes. 0 disables the limit.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings {
            max_bytes: default_max_bytes(),
        }
    }
}

/// Item id generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSettings {
    #[serde(default)]
    pub strategy: IdStrategy,

    /// Prefix for sequential ids.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "item-".to_string()
}

impl Default for IdSettings {
    fn default() -> Self {
        IdSettings {
            strategy: IdStrategy::default(),
            prefix: default_prefix(),
        }
    }
}

/// Logging behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit one `warn!` per validation error when a parse fails.
    #[serde(default = "default_true")]
    pub log_validation_errors: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            log_validation_errors: true,
        }
    }
}

// =============================================================================
// Main Parser Configuration
// =============================================================================

/// Complete parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub ids: IdSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ParserConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ParserResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading parser config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ParserError::ConfigLoadFailed(e.to_string()))?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load parser config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ParserResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ParserResult<()> {
        if self.ids.strategy == IdStrategy::Sequential && self.ids.prefix.trim().is_empty() {
            return Err(ParserError::InvalidConfig(
                "ids.prefix must not be empty for sequential ids".into(),
            ));
        }

        Ok(())
    }

    /// Builds the id generator this config selects.
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.ids.strategy {
            IdStrategy::Uuid => Box::new(UuidGenerator),
            IdStrategy::Sequential => Box::new(SequentialIds::new(self.ids.prefix.clone())),
        }
    }

    /// The input size limit, if any.
    pub fn max_input_bytes(&self) -> Option<usize> {
        match self.input.max_bytes {
            0 => None,
            n => Some(n),
        }
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(max) = std::env::var("CART_PARSER_MAX_BYTES") {
            match max.parse::<usize>() {
                Ok(n) => {
                    debug!(max_bytes = n, "Overriding input limit from environment");
                    self.input.max_bytes = n;
                }
                Err(_) => warn!(value = %max, "Ignoring invalid CART_PARSER_MAX_BYTES"),
            }
        }

        if let Ok(strategy) = std::env::var("CART_PARSER_ID_STRATEGY") {
            match strategy.parse() {
                Ok(parsed) => {
                    debug!(strategy = %strategy, "Overriding id strategy from environment");
                    self.ids.strategy = parsed;
                }
                Err(_) => warn!(strategy = %strategy, "Unknown id strategy in environment"),
            }
        }

        if let Ok(prefix) = std::env::var("CART_PARSER_ID_PREFIX") {
            self.ids.prefix = prefix;
        }

        if let Ok(flag) = std::env::var("CART_PARSER_LOG_VALIDATION_ERRORS") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.logging.log_validation_errors = true,
                "0" | "false" | "no" | "off" => self.logging.log_validation_errors = false,
                _ => warn!(value = %flag, "Ignoring invalid CART_PARSER_LOG_VALIDATION_ERRORS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cart", "cart-parser")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    const ENV_VARS: [&str; 4] = [
        "CART_PARSER_MAX_BYTES",
        "CART_PARSER_ID_STRATEGY",
        "CART_PARSER_ID_PREFIX",
        "CART_PARSER_LOG_VALIDATION_ERRORS",
    ];

    /// Serializes tests that read the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Holds the env lock and clears the parser variables on both ends.
    struct EnvGuard(#[allow(dead_code)] MutexGuard<'static, ()>);

    impl EnvGuard {
        fn acquire() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            for var in ENV_VARS {
                std::env::remove_var(var);
            }
            EnvGuard(guard)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in ENV_VARS {
                std::env::remove_var(var);
            }
        }
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_id_strategy_parsing() {
        assert_eq!("uuid".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
        assert_eq!("Sequential".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
        assert_eq!("counter".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
        assert!("snowflake".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.input.max_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(config.ids.strategy, IdStrategy::Uuid);
        assert!(config.logging.log_validation_errors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ParserConfig::from_toml(
            r#"
            [ids]
            strategy = "sequential"
            prefix = "line-"
            "#,
        )
        .unwrap();

        assert_eq!(config.ids.strategy, IdStrategy::Sequential);
        assert_eq!(config.ids.prefix, "line-");
        assert_eq!(config.input.max_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(config.id_generator().new_id(), "line-1");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ParserConfig::from_toml("[ids]\nstrategy = 7").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ParserConfig::default();
        config.ids.strategy = IdStrategy::Sequential;
        config.ids.prefix = "  ".to_string();
        assert!(config.validate().is_err());

        config.ids.strategy = IdStrategy::Uuid;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_bytes_means_unlimited() {
        let mut config = ParserConfig::default();
        assert_eq!(config.max_input_bytes(), Some(DEFAULT_MAX_INPUT_BYTES));

        config.input.max_bytes = 0;
        assert_eq!(config.max_input_bytes(), None);
    }

    #[test]
    fn test_toml_round_trip_sections() {
        let toml_str = toml::to_string_pretty(&ParserConfig::default()).unwrap();
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[ids]"));
        assert!(toml_str.contains("[logging]"));
    }

    #[test]
    fn test_load_reads_config_file() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [input]
            max_bytes = 2048

            [ids]
            strategy = "sequential"
            prefix = "row-"

            [logging]
            log_validation_errors = false
            "#,
        );

        let config = ParserConfig::load(Some(path)).unwrap();
        assert_eq!(config.input.max_bytes, 2048);
        assert_eq!(config.ids.strategy, IdStrategy::Sequential);
        assert_eq!(config.ids.prefix, "row-");
        assert!(!config.logging.log_validation_errors);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();

        let config = ParserConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_env_overrides_config_file() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ids]\nstrategy = \"uuid\"\nprefix = \"file-\"\n");

        std::env::set_var("CART_PARSER_ID_STRATEGY", "sequential");
        std::env::set_var("CART_PARSER_ID_PREFIX", "env-");
        std::env::set_var("CART_PARSER_MAX_BYTES", "64");

        let config = ParserConfig::load(Some(path)).unwrap();
        assert_eq!(config.ids.strategy, IdStrategy::Sequential);
        assert_eq!(config.ids.prefix, "env-");
        assert_eq!(config.input.max_bytes, 64);
        assert_eq!(config.id_generator().new_id(), "env-1");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ids]\nstrategy = \"sequential\"\n");

        std::env::set_var("CART_PARSER_ID_STRATEGY", "snowflake");
        std::env::set_var("CART_PARSER_MAX_BYTES", "lots");

        let config = ParserConfig::load(Some(path)).unwrap();
        assert_eq!(config.ids.strategy, IdStrategy::Sequential);
        assert_eq!(config.input.max_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_empty_env_prefix_fails_load() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ids]\nstrategy = \"sequential\"\nprefix = \"file-\"\n");

        std::env::set_var("CART_PARSER_ID_PREFIX", "");

        let err = ParserConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, ParserError::InvalidConfig(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let _env = EnvGuard::acquire();
        let dir = tempfile::tempdir().unwrap();

        let bad_toml = write_config(&dir, "[ids]\nstrategy = 7\n");
        assert!(ParserConfig::load(Some(bad_toml.clone())).is_err());
        assert_eq!(ParserConfig::load_or_default(Some(bad_toml)), ParserConfig::default());

        let path = dir.path().join("sequential.toml");
        std::fs::write(&path, "[ids]\nstrategy = \"sequential\"\n").unwrap();
        std::env::set_var("CART_PARSER_ID_PREFIX", " ");
        assert_eq!(ParserConfig::load_or_default(Some(path)), ParserConfig::default());
    }
}
