use std::time::Duration;

/// Runtime configuration for the prober.
///
/// All defaults mirror the tool's original behavior: no request timeout,
/// every probe in flight at once, and a User-Agent derived from the crate
/// name and version.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Timeout in seconds for HTTP requests (no timeout when unset)
    pub timeout: Option<u64>,

    /// Maximum number of in-flight probes (unbounded when unset)
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl Config {
    /// Get timeout as Duration, if one is configured
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
