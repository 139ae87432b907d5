//! # Cotacao Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Create the `exchange_rate` table if absent
//! - Create the rate service over the upstream provider and SQLite store
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{AwesomeApiProvider, RateService, inbound::HttpServer};
use cotacao_repo::build_store;

/// Builds an OTLP span exporter when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
fn init_tracer() -> anyhow::Result<Option<(sdktrace::Tracer, sdktrace::SdkTracerProvider)>> {
    if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_none() {
        return Ok(None);
    }

    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok(Some((provider.tracer("cotacao-server"), provider)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let otel = init_tracer()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rate server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Using rate API: {}", config.rate_api_url);

    // Build store (creates the table on first run)
    let store = build_store(&config.database_url).await?;

    let provider = AwesomeApiProvider::new(&config.rate_api_url).with_timeout(config.fetch_timeout);

    let service = RateService::with_timeouts(provider, store, config.timeouts);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
