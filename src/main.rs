//! Tombola service binary: wires the stores, the draw scheduler, and the
//! HTTP boundary.

use clap::Parser;
use std::sync::Arc;
use tombola::{
    api::{handlers::AppState, server::ApiServer},
    config::LotteryConfig,
    draw::{DrawEngine, UniformSource},
    history::HistoryStore,
    ledger::PrizePoolLedger,
    query::HistoricalQueryService,
    registration::RegistrationService,
    registry::SlotRegistry,
    scheduler::DrawScheduler,
    settlement::{LogNotifier, SettlementHandler},
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tombola")]
#[command(about = "Recurring numbers lottery service", long_about = None)]
struct Args {
    /// API server host
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// API server port
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Seconds between drawings
    #[arg(long, default_value = "60")]
    draw_period: u64,

    /// Flat participation fee per registration
    #[arg(long, default_value = "100.0")]
    fee: f64,

    /// Allowed CORS origins (comma-separated, use * for all)
    #[arg(long, default_value = "*")]
    cors_origins: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tombola=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = LotteryConfig::default();
    config.api.host = args.host;
    config.api.port = args.port;
    config.api.request_timeout_secs = args.timeout;
    config.api.allowed_origins = args
        .cors_origins
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();
    config.draw.period_secs = args.draw_period;
    config.draw.fee = args.fee;
    config.validate()?;

    // Shared stores, one mutation discipline each.
    let registry = Arc::new(SlotRegistry::new());
    let ledger = Arc::new(PrizePoolLedger::new());
    let history = Arc::new(HistoryStore::new());

    let registration = Arc::new(RegistrationService::new(
        registry.clone(),
        ledger.clone(),
        config.draw.fee,
    ));
    let query = Arc::new(HistoricalQueryService::new(history.clone()));

    let engine = Arc::new(DrawEngine::new(registry, Arc::new(UniformSource)));
    let settlement = Arc::new(SettlementHandler::new(
        ledger,
        history,
        Arc::new(LogNotifier),
    ));

    // Fatal on failure: the service must not run without its draw engine.
    let scheduler = DrawScheduler::new(engine, settlement, config.draw.period());
    let handle = scheduler.start()?;

    info!(
        period_secs = config.draw.period_secs,
        fee = config.draw.fee,
        "tombola lottery service started"
    );

    let state = Arc::new(AppState {
        registration,
        query,
    });
    let result = ApiServer::new(config.api.clone(), state).run().await;

    handle.shutdown();
    result
}
