use std::net::SocketAddr;

use metro_server::cache::{CacheConfig, CachedFeedClient};
use metro_server::feed::{FeedClient, FeedConfig, FeedSource, MockFeedClient};
use metro_server::presets::PresetStore;
use metro_server::topology::seoul::{seoul_directions, seoul_network};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Bundled network topology; a build failure here is a programming
    // error in the station tables.
    let topology = seoul_network().expect("bundled Seoul network is valid");
    let directions = seoul_directions();

    // MOCK_DATA_DIR switches the server onto JSON fixtures, which is
    // how it runs in development without an API key.
    let feed = match std::env::var("MOCK_DATA_DIR") {
        Ok(dir) => {
            println!("Serving fixture data from {dir}");
            let mock = MockFeedClient::new(&dir).expect("mock data directory is readable");
            FeedSource::Mock(mock)
        }
        Err(_) => {
            let api_key = std::env::var("SEOUL_API_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: SEOUL_API_KEY not set. API calls will fail.");
                String::new()
            });
            let client =
                FeedClient::new(FeedConfig::new(api_key)).expect("failed to create feed client");
            FeedSource::Live(CachedFeedClient::new(client, &CacheConfig::default()))
        }
    };

    let presets_dir = std::env::var("PRESETS_DIR").unwrap_or_else(|_| "presets".to_string());
    let presets = PresetStore::open(&presets_dir).expect("failed to open preset storage");

    println!("Loaded {} stations", topology.station_count());

    let state = AppState::new(topology, directions, feed, presets);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    println!("Metro arrivals server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                    - Health check");
    println!("  GET    /api/stations/search       - Search station names");
    println!("  GET    /arrivals/:station         - Arrival board for a station");
    println!("  GET    /route?from=&to=           - Next trains between two stations");
    println!("  GET    /presets/:user             - List saved routes");
    println!("  POST   /presets/:user             - Save a route");
    println!("  GET    /presets/:user/:name/next  - Next trains for a saved route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
