use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use networth_core::constants::DIVIDEND_WINDOW_DAYS;

/// Which quote source backs the valuation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSourceKind {
    Yahoo,
    /// Offline source loaded from `NW_STATIC_QUOTES_FILE`
    Static,
}

impl FromStr for QuoteSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yahoo" => Ok(QuoteSourceKind::Yahoo),
            "static" => Ok(QuoteSourceKind::Static),
            other => Err(anyhow!("Unknown NW_QUOTE_SOURCE: {}", other)),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub quote_source: QuoteSourceKind,
    pub static_quotes_file: Option<PathBuf>,
    /// `None` when `NW_QUOTE_TIMEOUT_MS=0`
    pub quote_timeout: Option<Duration>,
    pub dividend_window_days: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("NW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid NW_LISTEN_ADDR")?;
        let cors_allow = env_or("NW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_parse("NW_REQUEST_TIMEOUT_MS", 30000);
        let static_dir = env_or("NW_STATIC_DIR", "static");
        let quote_source = env_or("NW_QUOTE_SOURCE", "yahoo").parse()?;
        let static_quotes_file = std::env::var("NW_STATIC_QUOTES_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let quote_timeout_ms: u64 = env_parse("NW_QUOTE_TIMEOUT_MS", 10000);
        let dividend_window_days: i64 =
            env_parse("NW_DIVIDEND_WINDOW_DAYS", DIVIDEND_WINDOW_DAYS);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            quote_source,
            static_quotes_file,
            quote_timeout: (quote_timeout_ms > 0).then_some(Duration::from_millis(quote_timeout_ms)),
            dividend_window_days,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse `key`, falling back to `default` when unset or unparsable.
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
