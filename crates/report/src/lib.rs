//! Catalog report: loads a dataset and answers every catalog question about it.
//!
//! Structured logging goes through `tracing`; the binary writes logs to
//! stderr so stdout carries only the rendered report.

pub mod config;
pub mod error;
pub mod render;
pub mod sections;

use domain::{Dataset, Fixture};

pub use config::{Config, ReportFormat};
pub use error::{ReportError, Result};
pub use render::render;
pub use sections::Report;

/// Loads the configured fixture, or the bundled seed catalog when none is set.
#[tracing::instrument(skip(config), fields(fixture = ?config.fixture))]
pub fn load_dataset(config: &Config) -> Result<Dataset> {
    let fixture = match &config.fixture {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::seed()?,
    };
    Ok(fixture.into_dataset()?)
}

/// Builds and renders the report described by `config`.
#[tracing::instrument(skip(config), fields(format = %config.format, limit = config.limit))]
pub fn run(config: &Config) -> Result<String> {
    tracing::info!("generating report");
    let dataset = load_dataset(config)?;
    let report = Report::generate(&dataset, config.limit)?;
    let rendered = render(&report, config.format)?;

    metrics::counter!("reports_generated_total").increment(1);
    tracing::info!(bytes = rendered.len(), "report generated");
    Ok(rendered)
}
