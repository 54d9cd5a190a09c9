use anyhow::{Context, Result};
use clap::Parser;
use lifecycle_sweep::{
    create_s3_app, SweepConfig, DEFAULT_BUCKET_PREFIX, DEFAULT_MAX_CONCURRENT_UPDATES,
    DEFAULT_RETENTION_DAYS,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lifecycle-sweep")]
#[command(about = "Apply a short-retention lifecycle policy to S3 buckets matching a name prefix", long_about = None)]
struct Cli {
    /// Bucket name prefix to sweep
    #[arg(short, long, env = "BUCKET_PREFIX", default_value = DEFAULT_BUCKET_PREFIX)]
    prefix: String,

    /// Days before objects, noncurrent versions and incomplete multipart
    /// uploads expire
    #[arg(long, env = "RETENTION_DAYS", default_value_t = DEFAULT_RETENTION_DAYS)]
    retention_days: u32,

    /// Maximum concurrent lifecycle update requests
    #[arg(long, env = "MAX_CONCURRENT_UPDATES", default_value_t = DEFAULT_MAX_CONCURRENT_UPDATES)]
    max_concurrent: usize,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_sweep_config(&self) -> SweepConfig {
        SweepConfig::new()
            .with_prefix(&self.prefix)
            .with_retention_days(self.retention_days)
            .with_max_concurrent(self.max_concurrent)
    }

    fn init_logging(&self) {
        let filter =
            EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    info!("Starting bucket lifecycle sweep");
    info!("Bucket prefix: {}", cli.prefix);
    info!("Retention days: {}", cli.retention_days);

    // Build the application against S3 with ambient credentials
    let service = create_s3_app(cli.to_sweep_config())
        .await
        .context("Failed to build application")?;

    // A listing failure is fatal; per-bucket failures are reported in the
    // summary and leave the exit status untouched
    let report = service.run().await.context("Sweep aborted")?;

    println!(
        "Swept {} buckets matching '{}': {} updated, {} failed",
        report.matched(),
        cli.prefix,
        report.applied.len(),
        report.failed.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "lifecycle-sweep",
            "--prefix",
            "staging-",
            "--retention-days",
            "3",
            "--max-concurrent",
            "5",
        ]);

        assert_eq!(cli.prefix, "staging-");
        assert_eq!(cli.retention_days, 3);
        assert_eq!(cli.max_concurrent, 5);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["lifecycle-sweep"]);

        let config = cli.to_sweep_config();
        assert_eq!(config.prefix, "my-test-");
        assert_eq!(config.retention_days, 1);
        assert_eq!(config.max_concurrent, 15);
    }
}
