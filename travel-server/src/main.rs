use std::net::SocketAddr;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use travel_server::archive::ResultArchive;
use travel_server::rasp::{RaspClient, RaspConfig};
use travel_server::stations::StationDirectory;
use travel_server::web::{AppState, create_router};

/// Station codes file loaded when RASP_STATION_CODES is not set.
const DEFAULT_CODES_FILE: &str = "codes.json";

/// Install a formatted subscriber filtered by RUST_LOG, defaulting to info.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Get the API key from the environment
    let api_key = std::env::var("RASP_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: RASP_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Load the station directory (fail fast if unavailable)
    let codes_file =
        std::env::var("RASP_STATION_CODES").unwrap_or_else(|_| DEFAULT_CODES_FILE.to_string());
    let directory = match StationDirectory::load(&codes_file) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Failed to load station codes: {e}");
            std::process::exit(1);
        }
    };
    println!("Loaded {} station names from {codes_file}", directory.len());

    // Create the provider client
    let mut config = RaspConfig::new(&api_key);
    if let Ok(base_url) = std::env::var("RASP_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let rasp = RaspClient::new(config).expect("Failed to create Rasp client");

    // Archive for composite route results
    let results_dir = std::env::var("RASP_RESULTS_DIR").unwrap_or_else(|_| ".".to_string());
    let archive = ResultArchive::new(results_dir);

    // Build app state
    let state = AppState::new(rasp, directory, archive);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("Invalid PORT env variable");
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Travel server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health             - Health check");
    println!("  GET /api/schedule       - Schedule between two stations");
    println!("  GET /api/routes         - Direct route lookup");
    println!("  GET /api/complex_route  - One-transfer route composition");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
