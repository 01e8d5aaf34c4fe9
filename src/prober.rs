use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::header::ALT_SVC;
use reqwest::redirect::Policy;

use crate::constants::{defaults, status};
use crate::error::H3upError;
use crate::{config::Config, logging};

use std::fmt;

#[async_trait]
pub trait ProbeUrls {
    async fn probe_urls_with_config(&self, urls: Vec<String>, config: &Config)
    -> Vec<ProbeResult>;
}

#[derive(Default, Debug)]
pub struct Prober {}

/// Outcome of a single probe.
///
/// `CheckFailed` keeps the failure reason around for logging, but renders
/// identically to `NotSupported` in the report: a URL that could not be
/// reached is indistinguishable from one that does not advertise HTTP/3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Supported,
    NotSupported,
    CheckFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn supported(url: String) -> Self {
        Self {
            url,
            outcome: ProbeOutcome::Supported,
        }
    }

    pub fn not_supported(url: String) -> Self {
        Self {
            url,
            outcome: ProbeOutcome::NotSupported,
        }
    }

    pub fn check_failed(url: String, description: String) -> Self {
        Self {
            url,
            outcome: ProbeOutcome::CheckFailed(description),
        }
    }

    /// Whether the response carried an `alt-svc` header.
    pub fn is_supported(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Supported)
    }

    /// Status label as rendered in the report.
    pub fn status_label(&self) -> &'static str {
        if self.is_supported() {
            status::SUPPORTED
        } else {
            status::NOT_SUPPORTED
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.status_label())
    }
}

#[async_trait]
impl ProbeUrls for Prober {
    /// Probe all URLs concurrently, returning one result per input URL in
    /// input order regardless of completion order.
    async fn probe_urls_with_config(
        &self,
        urls: Vec<String>,
        config: &Config,
    ) -> Vec<ProbeResult> {
        let url_count = urls.len();

        // Default is every probe in flight at once. buffered() requires a
        // non-zero capacity, so an empty input still gets a valid stream.
        let concurrency = config.concurrency.unwrap_or(url_count).max(1);

        let mut probes = stream::iter(urls)
            .map(|url| async move {
                let outcome = Self::probe(&url, config).await;
                ProbeResult { url, outcome }
            })
            .buffered(concurrency);

        let mut results = Vec::with_capacity(url_count);
        while let Some(result) = probes.next().await {
            logging::log_probe_result(&result);
            results.push(result);
        }

        results
    }
}

impl Prober {
    /// Probe a single URL.
    ///
    /// Every failure is absorbed here; nothing propagates to the fan-in, so
    /// one unreachable URL can never fail the batch.
    async fn probe(url: &str, config: &Config) -> ProbeOutcome {
        match Self::fetch_alt_svc_presence(url, config).await {
            Ok(true) => ProbeOutcome::Supported,
            Ok(false) => ProbeOutcome::NotSupported,
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                ProbeOutcome::CheckFailed(description)
            }
        }
    }

    /// Issue one GET request and check for an `alt-svc` response header.
    ///
    /// The header value is never parsed; presence alone counts, even when
    /// empty or on a non-2xx response. Each probe builds its own client, so
    /// no connection pool or session state is shared between in-flight
    /// requests.
    async fn fetch_alt_svc_presence(url: &str, config: &Config) -> crate::Result<bool> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent);

        if let Some(timeout) = config.timeout_duration() {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().map_err(H3upError::Http)?;
        let response = client.get(url).send().await?;

        Ok(response.headers().contains_key(ALT_SVC))
    }
}
