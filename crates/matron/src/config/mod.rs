use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::rules::CatalogMode;

/// Distinguishes runtime behavior for different deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the assessment tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub rules: RulesConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MATRON_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let catalog_path = env::var("MATRON_RULES_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let include_core = flag("MATRON_CORE_RULES", true)?;
        let strict = flag("MATRON_STRICT_RULES", true)?;

        let log_level = env::var("MATRON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            rules: RulesConfig {
                include_core,
                catalog_path,
                strict,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}

/// Which rule catalogs feed the engine.
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub include_core: bool,
    pub catalog_path: Option<PathBuf>,
    pub strict: bool,
}

impl RulesConfig {
    pub fn catalog_mode(&self) -> CatalogMode {
        if self.strict {
            CatalogMode::Strict
        } else {
            CatalogMode::Lenient
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
