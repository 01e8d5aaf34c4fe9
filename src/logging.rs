use crate::config::Config;
use crate::prober::{ProbeOutcome, ProbeResult};
use log::{debug, error, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, url_count: usize) {
    let timeout = config
        .timeout
        .map_or_else(|| "none".to_string(), |t| format!("{t}s"));
    let concurrency = config
        .concurrency
        .map_or_else(|| "unbounded".to_string(), |c| c.to_string());

    info!("Probing {url_count} URL(s)");
    info!("Configuration: concurrency={concurrency}, timeout={timeout}");
}

/// Log individual probe results for debugging.
///
/// This is the only place the `CheckFailed` reason surfaces; the report
/// renders it as "Not Supported".
pub fn log_probe_result(result: &ProbeResult) {
    match &result.outcome {
        ProbeOutcome::Supported => debug!("✓ {} -> alt-svc present", result.url),
        ProbeOutcome::NotSupported => debug!("✗ {} -> no alt-svc header", result.url),
        ProbeOutcome::CheckFailed(description) => {
            debug!("? {} -> check failed: {description}", result.url)
        }
    }
}

/// Log probe completion summary
pub fn log_probe_complete(results: &[ProbeResult]) {
    let supported = results.iter().filter(|r| r.is_supported()).count();
    info!(
        "Probing complete: {supported}/{} URL(s) advertise HTTP/3",
        results.len()
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
