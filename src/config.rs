//! Configuration types for ticker-merge

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Input file list
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Files to merge, processed strictly in this order. The first file that
    /// parses seeds the table, so the order here is the output column order.
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,
}

fn default_files() -> Vec<PathBuf> {
    ["AAPL.csv", "ABB.csv", "HPQ.csv", "MSFT.csv", "NVDA.csv"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
        }
    }
}

/// Output location and preview size
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the combined CSV
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Rows echoed to the console after a successful write
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("merged_stocks.csv")
}
fn default_preview_rows() -> usize {
    5
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            preview_rows: default_preview_rows(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Default log level; `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
