use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::{Config, TelemetrySink};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "colornotify configuration".bold());
            println!();

            println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
            println!();

            let telemetry = &config.telemetry;
            let sinks: Vec<&str> = telemetry
                .sinks
                .iter()
                .map(|sink| match sink {
                    TelemetrySink::File => "file",
                    TelemetrySink::Stdout => "stdout",
                    TelemetrySink::Http => "http",
                })
                .collect();

            println!("{}:", "telemetry".cyan());
            println!("  enabled: {}", telemetry.enabled);
            println!("  sinks: {}", sinks.join(", "));
            println!(
                "  http_endpoint: {}",
                telemetry.http_endpoint.as_deref().unwrap_or("(none)")
            );
            println!("  path: {}", Config::expand_path(&telemetry.path).display());
        }
    }

    Ok(())
}
