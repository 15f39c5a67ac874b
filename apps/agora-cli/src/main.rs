//! # Agora CLI
//!
//! Builds the reference social network in memory and prints the result.

use std::sync::Arc;

use agora_infra::{SystemClock, TracingAuditSink};
use anyhow::Context;

mod config;
mod report;
mod scenario;
mod telemetry;

use config::{AppConfig, OutputFormat};
use report::Report;
use telemetry::TelemetryConfig;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let scenario = scenario::run(Arc::new(SystemClock::new()), Arc::new(TracingAuditSink))
        .context("scenario failed")?;
    let report = Report::build(&scenario).context("failed to build report")?;

    match config.output {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
