//! h3up - check which URLs advertise HTTP/3 support
//!
//! Issues one GET request per URL concurrently and inspects the `alt-svc`
//! response header as a heuristic for HTTP/3 advertisement. Header presence
//! is a weak signal: a conclusive answer would require an actual QUIC
//! connection attempt, which this tool deliberately does not make.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod prober;
pub mod report;

// Re-export commonly used items for convenience
pub use config::Config;
pub use error::{H3upError, Result};
pub use prober::{ProbeOutcome, ProbeResult, ProbeUrls, Prober};
pub use report::Reporter;
