use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for FlowMetrics
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FlowMetricsConfig {
    /// Metric computation defaults
    pub metrics: MetricsConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// IANA timezone used for "today" when computing Work Item Age
    pub timezone: String,
    /// Comma-separated `Status [new]` values that count as the start of work
    pub in_progress_aliases: String,
    /// Comma-separated `Status [new]` values that count as completed
    pub done_aliases: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            timezone: "America/New_York".to_string(),
            in_progress_aliases: "IN PROGRESS,IN-PROGRESS,IN_PROGRESS,INPROGRESS".to_string(),
            done_aliases: "DONE,CLOSED,RESOLVED".to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl FlowMetricsConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (flowmetrics.toml)
    /// 3. Environment variables (prefixed with FLOWMETRICS_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("flowmetrics.toml").exists() {
            builder = builder.add_source(File::with_name("flowmetrics"));
        }

        builder = builder.add_source(
            Environment::with_prefix("FLOWMETRICS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let flowmetrics_config: FlowMetricsConfig = config.try_deserialize()?;

        Ok(flowmetrics_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<FlowMetricsConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = FlowMetricsConfig::load_env_file();
        FlowMetricsConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static FlowMetricsConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlowMetricsConfig::default();
        assert_eq!(config.metrics.timezone, "America/New_York");
        assert!(config.metrics.in_progress_aliases.contains("IN PROGRESS"));
        assert!(config.metrics.done_aliases.contains("RESOLVED"));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flowmetrics.toml");
        let config = FlowMetricsConfig::default();
        config.save_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: FlowMetricsConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed.metrics.timezone, config.metrics.timezone);
    }
}
