use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use volley::config::{
    RunConfig, DEFAULT_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TOTAL_REQUESTS,
    ENDPOINT_ENV_VAR,
};
use volley::{Reporter, Runner, StdoutReporter};

/// Fire a fixed volley of JSON POST requests at an inference endpoint and
/// report success count and mean latency.
#[derive(Debug, Parser)]
#[command(name = "volley", version)]
struct Args {
    /// Target endpoint; falls back to the INFERENCE_ENDPOINT environment variable.
    #[arg(long, env = ENDPOINT_ENV_VAR)]
    endpoint: Option<Url>,

    /// Number of concurrent workers.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Total number of requests to send.
    #[arg(long = "requests", default_value_t = DEFAULT_TOTAL_REQUESTS)]
    total_requests: u64,

    /// Per-request timeout in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let endpoint = args
        .endpoint
        .ok_or(volley::ConfigError::MissingEndpoint)?;
    let config = RunConfig::builder()
        .endpoint(endpoint)
        .concurrency(args.concurrency)
        .total_requests(args.total_requests)
        .request_timeout(Duration::from_millis(args.timeout_ms))
        .build();

    let summary = Runner::new(config).run().await?;

    // Failed requests are reported, not treated as harness errors: the
    // process exits zero as long as the run itself completed.
    StdoutReporter
        .report(&summary)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to write summary")?;
    Ok(())
}
