//! Ticket Hotels HTTP server.

use std::error::Error;
use std::sync::Arc;

use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ticket_hotels::adapters::auth::JwtSessionValidator;
use ticket_hotels::adapters::http::{app_router, HotelsAppState};
use ticket_hotels::adapters::postgres::{
    connect_pool, run_migrations, PostgresHotelReader, PostgresSessionStore,
    PostgresTicketingReader,
};
use ticket_hotels::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    info!(
        environment = ?config.server.environment,
        run_migrations = config.database.run_migrations,
        "Configuration loaded"
    );

    let pool = connect_pool(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Database pool connected"
    );

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Migrations applied");
    }

    let sessions = Arc::new(PostgresSessionStore::new(pool.clone()));
    let validator = Arc::new(JwtSessionValidator::new(&config.auth.jwt_secret, sessions));

    let state = HotelsAppState {
        ticketing_reader: Arc::new(PostgresTicketingReader::new(pool.clone())),
        hotel_reader: Arc::new(PostgresHotelReader::new(pool)),
    };

    let app = app_router(state, validator).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(cors_layer(&config.server))
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let addr = config.server.bind_address;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere.
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&server.log_level))?;

    let (json, pretty) = if server.is_production() {
        (Some(fmt::layer().json().with_current_span(true)), None)
    } else {
        (None, Some(fmt::layer().with_target(false)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .try_init()?;

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                error!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE]);

    if origins.is_empty() && !server.is_production() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
