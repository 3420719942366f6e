use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use booking_cell::repository::{BookingRepository, SupabaseBookingRepository};
use booking_cell::services::booking::BookingService;
use shared_config::AppConfig;
use shared_database::SupabaseClient;
use work_cell::repository::{SupabaseWorkRepository, WorkRepository};
use work_cell::services::catalog::WorkService;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic booking API server");

    // Load configuration and wire the storage-backed repositories into the
    // services.
    let config = AppConfig::from_env();
    let supabase = Arc::new(SupabaseClient::new(&config));

    let works: Arc<dyn WorkRepository> =
        Arc::new(SupabaseWorkRepository::new(Arc::clone(&supabase)));
    let bookings: Arc<dyn BookingRepository> =
        Arc::new(SupabaseBookingRepository::new(supabase));

    let work_service = Arc::new(WorkService::new(Arc::clone(&works)));
    let booking_service = Arc::new(BookingService::new(bookings, works));

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(work_service, booking_service)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
