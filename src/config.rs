use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "colornotify";
const CONFIG_FILE: &str = "colornotify.yaml";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub telemetry: TelemetryConfig,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Telemetry sink type
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TelemetrySink {
    /// Append to JSONL files under the telemetry path
    File,
    /// Print to stdout
    Stdout,
    /// POST to an HTTP endpoint
    Http,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Enable error reporting
    pub enabled: bool,
    /// Which sinks to send reports to
    pub sinks: Vec<TelemetrySink>,
    /// HTTP endpoint for http sink
    pub http_endpoint: Option<String>,
    /// Base directory for the file sink
    pub path: PathBuf,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sinks: vec![TelemetrySink::File],
            http_endpoint: None,
            path: Config::data_dir(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let mut candidates = Vec::new();

        if let Ok(env_path) = std::env::var("COLORNOTIFY_CONFIG") {
            candidates.push(PathBuf::from(env_path));
        }
        if let Ok(dir) = std::env::var("COLORNOTIFY_DIR") {
            candidates.push(PathBuf::from(dir).join(CONFIG_FILE));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(APP_NAME).join(CONFIG_FILE));
        }
        candidates.push(PathBuf::from(CONFIG_FILE));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Base directory for telemetry data. `COLORNOTIFY_DIR` wins if set.
    pub fn data_dir() -> PathBuf {
        std::env::var("COLORNOTIFY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME))
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
