use clap::Parser;
use h3up::config::Config;
use h3up::logging;
use h3up::prober::{ProbeUrls, Prober};
use h3up::report::Reporter;

/// The fixed set of origins to probe. Popular sites chosen as a broad
/// sample of HTTP/3 rollout across large operators.
const URL_LIST: [&str; 20] = [
    "https://www.google.com/",
    "https://www.facebook.com/",
    "https://www.youtube.com/",
    "https://www.instagram.com/",
    "https://twitter.com/",
    "https://www.amazon.com/",
    "https://www.bing.com/",
    "https://www.pinterest.com/",
    "https://www.yahoo.com/",
    "https://www.wikipedia.org/",
    "https://www.reddit.com/",
    "https://www.linkedin.com/",
    "https://www.tiktok.com/",
    "https://www.netflix.com/",
    "https://zoom.us/",
    "https://www.roblox.com/",
    "https://www.microsoft.com/en-us/",
    "https://www.msn.com/",
    "https://www.baidu.com/",
    "https://www.ebay.com/",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Connection timeout in seconds (default: no timeout)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Core Options")]
    timeout: Option<u64>,

    /// Maximum concurrent probes (default: all at once)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    concurrency: Option<usize>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    user_agent: Option<String>,

    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> h3up::Result<()> {
    let config = Config {
        timeout: cli.timeout,
        concurrency: cli.concurrency,
        user_agent: cli.user_agent.clone(),
    };

    let urls: Vec<String> = URL_LIST.iter().map(|url| url.to_string()).collect();
    logging::log_config_info(&config, urls.len());

    let prober = Prober::default();
    let results = prober.probe_urls_with_config(urls, &config).await;
    logging::log_probe_complete(&results);

    Reporter::default().print_report(&results)?;

    Ok(())
}
