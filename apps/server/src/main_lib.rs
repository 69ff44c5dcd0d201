use std::sync::Arc;

use anyhow::Context;
use networth_core::constants::LOT_SIZE;
use networth_core::portfolio::valuation::{
    PortfolioValuationService, PortfolioValuationServiceTrait, ValuationSettings,
};
use networth_market_data::{QuoteSource, StaticQuoteSource, YahooQuoteSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, QuoteSourceKind};

pub struct AppState {
    pub valuation_service: Arc<dyn PortfolioValuationServiceTrait + Send + Sync>,
    /// Identifier of the quote source in use, reported by the health check
    pub quote_source_id: &'static str,
}

pub fn init_tracing() {
    let log_format = std::env::var("NW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let quote_source: Arc<dyn QuoteSource> = match config.quote_source {
        QuoteSourceKind::Yahoo => {
            Arc::new(YahooQuoteSource::new().context("Failed to create Yahoo quote source")?)
        }
        QuoteSourceKind::Static => Arc::new(load_static_source(config).await?),
    };
    tracing::info!("Using quote source {}", quote_source.id());
    Ok(build_state_with_source(config, quote_source))
}

/// Wire the services around an already constructed quote source.
pub fn build_state_with_source(config: &Config, quote_source: Arc<dyn QuoteSource>) -> Arc<AppState> {
    let settings = ValuationSettings {
        lot_size: LOT_SIZE,
        dividend_window_days: config.dividend_window_days,
        quote_timeout: config.quote_timeout,
    };
    let quote_source_id = quote_source.id();
    let valuation_service = Arc::new(PortfolioValuationService::new(quote_source, settings));

    Arc::new(AppState {
        valuation_service,
        quote_source_id,
    })
}

async fn load_static_source(config: &Config) -> anyhow::Result<StaticQuoteSource> {
    let Some(path) = &config.static_quotes_file else {
        tracing::warn!("NW_STATIC_QUOTES_FILE not set; every quote will be unavailable");
        return Ok(StaticQuoteSource::new());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read static quotes file {}", path.display()))?;
    let source = StaticQuoteSource::from_json(&json)
        .with_context(|| format!("Failed to parse static quotes file {}", path.display()))?;
    Ok(source)
}
