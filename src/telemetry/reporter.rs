//! Error reporter with multiple sink support

use chrono::{Local, Utc};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{Config, TelemetryConfig, TelemetrySink};

/// Anything that can take a captured error off our hands
pub trait ErrorReporter {
    /// Fire and forget. Delivery failures are logged, never returned.
    fn capture(&self, error: &eyre::Report);
}

/// A captured error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Timestamp (UTC ISO 8601)
    pub timestamp: String,
    /// Local time for display
    pub local_time: String,
    /// Top-level error message
    pub message: String,
    /// Causes below the top-level message, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    pub program: String,
    pub version: String,
}

impl Report {
    pub fn from_error(error: &eyre::Report) -> Self {
        let now = Utc::now();
        let local = Local::now();

        Self {
            timestamp: now.to_rfc3339(),
            local_time: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            message: error.to_string(),
            causes: error.chain().skip(1).map(|cause| cause.to_string()).collect(),
            program: env!("CARGO_PKG_NAME").to_string(),
            version: env!("GIT_DESCRIBE").to_string(),
        }
    }

    /// Format for stdout display
    pub fn format_display(&self) -> String {
        let mut parts = vec![
            self.local_time.dimmed().to_string(),
            "error".red().bold().to_string(),
            self.message.clone(),
        ];

        if !self.causes.is_empty() {
            parts.push(format!("({})", self.causes.join(": ")).dimmed().to_string());
        }

        parts.join(" ")
    }
}

/// Reporter that sends to every configured sink
pub struct TelemetryReporter {
    config: TelemetryConfig,
    base_path: PathBuf,
}

impl TelemetryReporter {
    pub fn new(config: TelemetryConfig) -> Self {
        let base_path = Config::expand_path(&config.path);
        Self { config, base_path }
    }

    /// Where today's file sink writes
    pub fn file_path(&self) -> PathBuf {
        let now = Local::now();
        self.base_path
            .join("errors")
            .join(now.format("%Y-%m").to_string())
            .join(format!("{}.jsonl", now.format("%Y-%m-%d")))
    }

    fn report_to_file(&self, report: &Report) -> std::io::Result<()> {
        let log_file = self.file_path();
        if let Some(dir) = log_file.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(log_file)?;

        let json = serde_json::to_string(report).map_err(std::io::Error::other)?;
        writeln!(file, "{}", json)?;

        Ok(())
    }

    fn report_to_stdout(&self, report: &Report) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        Self::report_to_writer(report, &mut stdout.lock())
    }

    fn report_to_writer<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", report.format_display())
    }

    fn report_to_http(&self, report: &Report) -> Result<(), String> {
        let endpoint = self
            .config
            .http_endpoint
            .as_ref()
            .ok_or_else(|| "HTTP endpoint not configured".to_string())?;

        let body = serde_json::to_string(report).map_err(|e| e.to_string())?;

        match ureq::post(endpoint)
            .header("Content-Type", "application/json")
            .send(body.as_bytes())
        {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("HTTP request failed: {}", e)),
        }
    }
}

impl ErrorReporter for TelemetryReporter {
    fn capture(&self, error: &eyre::Report) {
        if !self.config.enabled {
            log::debug!("Telemetry disabled, dropping report: {}", error);
            return;
        }

        let report = Report::from_error(error);

        for sink in &self.config.sinks {
            match sink {
                TelemetrySink::File => {
                    if let Err(e) = self.report_to_file(&report) {
                        log::warn!("Failed to write report to file sink: {}", e);
                    }
                }
                TelemetrySink::Stdout => {
                    if let Err(e) = self.report_to_stdout(&report) {
                        log::warn!("Failed to write report to stdout sink: {}", e);
                    }
                }
                TelemetrySink::Http => {
                    if let Err(e) = self.report_to_http(&report) {
                        log::warn!("Failed to send report to HTTP sink: {}", e);
                    }
                }
            }
        }

        log::info!("Captured error: {}", report.message);
    }
}
