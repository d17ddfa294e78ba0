use airpulse::config::{Config, API_KEY_ENV, DEFAULT_BASE_URL};
use airpulse::server;
use clap::Parser;

/// Airpulse — air-quality gateway over the OpenWeatherMap API.
///
/// Exposes GET /api/health and GET /api/air-quality. City names are resolved
/// to coordinates upstream; current and forecast pollution payloads are
/// merged into one JSON report.
///
/// Examples:
///   airpulse
///   airpulse --port 8080
///   airpulse --api-key <key> --base-url http://localhost:9100
#[derive(Parser)]
#[command(name = "airpulse", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = 8001)]
    port: u16,

    /// OpenWeatherMap API key. Falls back to $OPENWEATHER_API_KEY.
    #[arg(long)]
    api_key: Option<String>,

    /// Upstream base URL (point at a mock provider for testing).
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Upstream request timeout in seconds. 0 disables the bound, matching
    /// the behavior of a client with no configured limit.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| {
            eprintln!("Error: No API key. Pass --api-key or set {}.", API_KEY_ENV);
            std::process::exit(1);
        });

    let config = Config {
        host: cli.host,
        port: cli.port,
        api_key,
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
    };

    server::start(&config).await;
}
