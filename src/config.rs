use std::time::Duration;

use typed_builder::TypedBuilder;
use url::Url;

/// Workers started when `--concurrency` is not given.
pub const DEFAULT_CONCURRENCY: usize = 5;
/// Requests fired when `--requests` is not given.
pub const DEFAULT_TOTAL_REQUESTS: u64 = 50;
/// Per-request timeout; must stay finite so a hung endpoint cannot hang the run.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable naming the endpoint when no `--endpoint` flag is given.
pub const ENDPOINT_ENV_VAR: &str = "INFERENCE_ENDPOINT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no endpoint configured: pass --endpoint or set {ENDPOINT_ENV_VAR}")]
    MissingEndpoint,
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("endpoint must be an http(s) URL, got scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("request timeout must be non-zero")]
    ZeroTimeout,
}

/// Immutable configuration of a single load run.
///
/// Validated once via [`RunConfig::validate`] before any worker starts;
/// a failed validation means no request is ever sent.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    /// Absolute URL the workers POST each payload to.
    pub endpoint: Url,
    /// Number of concurrent workers; fixed for the run, never auto-scaled.
    #[builder(default = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
    /// Number of requests in the volley. Zero is a valid (empty) run.
    #[builder(default = DEFAULT_TOTAL_REQUESTS)]
    pub total_requests: u64,
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.endpoint.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_owned())),
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("http://127.0.0.1:9999/infer").unwrap()
    }

    #[test]
    fn defaults_pass_validation() {
        let config = RunConfig::builder().endpoint(endpoint()).build();
        assert!(config.validate().is_ok());
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(config.total_requests, DEFAULT_TOTAL_REQUESTS);
    }

    #[test]
    fn rejects_zero_concurrency() {
        let config = RunConfig::builder()
            .endpoint(endpoint())
            .concurrency(0)
            .build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroConcurrency)
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = RunConfig::builder()
            .endpoint(Url::parse("ftp://example.com/x").unwrap())
            .build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = RunConfig::builder()
            .endpoint(endpoint())
            .request_timeout(Duration::ZERO)
            .build();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }
}
