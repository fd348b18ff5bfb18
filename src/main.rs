use clap::Parser;
use maps_relay::config::AppConfig;
use maps_relay::lookup::{lookup_nearby, LookupRequest};
use maps_relay::server;

/// maps-relay — geocode a location name, then list nearby places by category.
///
/// Runs as an HTTP relay by default. With --location and --type it performs
/// a single lookup and prints the result JSON to stdout instead.
///
/// Configuration comes from the environment: GOOGLE_MAPS_API_KEY (required),
/// FRONTEND_ORIGIN, HOST, PORT, GEOCODE_BASE_URL, PLACES_BASE_URL.
///
/// Examples:
///   maps-relay
///   maps-relay --port 9000
///   maps-relay --location Mumbai --type restaurant
#[derive(Parser)]
#[command(name = "maps-relay", version, about, long_about = None)]
struct Cli {
    /// Bind host. Overrides the HOST environment variable.
    #[arg(long)]
    host: Option<String>,

    /// Bind port. Overrides the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,

    /// One-shot mode: free-text location to look up.
    #[arg(long)]
    location: Option<String>,

    /// One-shot mode: place category (e.g. restaurant, cafe).
    #[arg(long = "type")]
    category: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    // ── One-shot lookup ─────────────────────────────────────────

    match (&cli.location, &cli.category) {
        (Some(location), Some(category)) => {
            let req = LookupRequest {
                category: category.clone(),
                location: location.clone(),
                limit: 0,
            };
            match lookup_nearby(&req, &config.providers) {
                Ok(found) => {
                    eprintln!("  {} places near '{}'", found.results.len(), location);
                    println!("{}", serde_json::to_string_pretty(&found).unwrap());
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }
        (None, None) => {}
        _ => {
            eprintln!("Error: one-shot mode needs both --location and --type.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  maps-relay --location Mumbai --type restaurant");
            std::process::exit(1);
        }
    }

    // ── Serve ───────────────────────────────────────────────────

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });

    runtime.block_on(server::start(config));
}
