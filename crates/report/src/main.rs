//! Catalog report entry point.

use std::process::ExitCode;

use report::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    // 1. Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("catalog-report: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 2. Initialize tracing on stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 3. Install Prometheus metrics recorder
    let metrics_handle = if config.print_metrics {
        match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "metrics recorder not installed");
                None
            }
        }
    } else {
        None
    };

    // 4. Build and print the report
    let status = match report::run(&config) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "report failed");
            ExitCode::FAILURE
        }
    };

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }
    status
}
