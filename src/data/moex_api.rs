//! Market data gateway over the MOEX ISS REST API.
//!
//! Both public operations issue one GET and never fail: transport errors,
//! bad statuses and unexpected JSON are logged and collapse to an empty
//! result, so the UI shows "nothing found" instead of an error.

use std::error::Error;
use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{MARKET, MOEX, MoexApiConfig};
use crate::data::series::to_series;
use crate::data::wire::{parse_candles, parse_securities};
use crate::domain::{CandlePoint, SecurityRef};

/// Failure kinds inside the gateway. Callers only ever see empty results.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    Network(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The body was not JSON or lacked the expected fields
    Malformed(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "Network failure: {}", msg),
            GatewayError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            GatewayError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl Error for GatewayError {}

/// Source of securities and candles. `MoexClient` is the real one; tests use fakes.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataSource {
    /// Securities whose ticker or name contains `query` (case-insensitive).
    /// An empty query returns the whole universe.
    async fn search_securities(&self, query: &str) -> Vec<SecurityRef>;

    /// The most recent window of candles for `symbol`, oldest first.
    async fn fetch_candles(&self, symbol: &str) -> Vec<CandlePoint>;
}

/// Keep securities matching `query`; an empty (or blank) query keeps everything.
pub fn filter_securities(securities: Vec<SecurityRef>, query: &str) -> Vec<SecurityRef> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return securities;
    }
    securities
        .into_iter()
        .filter(|s| s.matches(&needle))
        .collect()
}

/// HTTP client for the ISS endpoints.
#[derive(Clone)]
pub struct MoexClient {
    config: MoexApiConfig,
    http: reqwest::Client,
}

impl MoexClient {
    pub fn new(config: MoexApiConfig) -> anyhow::Result<Self> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    pub fn securities_url(&self) -> String {
        format!(
            "{}/iss/engines/stock/markets/shares/boardgroups/{}/securities.json?iss.meta=off&iss.json=extended&securities.columns=SECID,SHORTNAME",
            self.config.base_url, MOEX.board_group
        )
    }

    /// Candles are requested newest first (`iss.reverse=true`) so `limit`
    /// yields the latest window; the series transform re-sorts them.
    pub fn candles_url(&self, symbol: &str) -> String {
        format!(
            "{}/iss/engines/stock/markets/shares/securities/{}/candles.json?iss.meta=off&iss.only=candles&candles.columns=begin,close&interval={}&limit={}&iss.reverse=true",
            self.config.base_url,
            symbol.trim().to_uppercase(),
            MOEX.candles.interval,
            MOEX.candles.limit
        )
    }

    async fn get_json(&self, url: &str) -> Result<Value, GatewayError> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("GET {}", url);
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    pub async fn try_search_securities(
        &self,
        query: &str,
    ) -> Result<Vec<SecurityRef>, GatewayError> {
        let body = self.get_json(&self.securities_url()).await?;
        let securities = parse_securities(&body)?;
        Ok(filter_securities(securities, query))
    }

    pub async fn try_fetch_candles(
        &self,
        symbol: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<CandlePoint>, GatewayError> {
        let body = self.get_json(&self.candles_url(symbol)).await?;
        let raw = parse_candles(&body)?;
        Ok(to_series(raw, now, MARKET.offset()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataSource for MoexClient {
    async fn search_securities(&self, query: &str) -> Vec<SecurityRef> {
        match self.try_search_securities(query).await {
            Ok(securities) => securities,
            Err(e) => {
                log::error!("Error fetching securities (query '{}'): {}", query, e);
                Vec::new()
            }
        }
    }

    async fn fetch_candles(&self, symbol: &str) -> Vec<CandlePoint> {
        let now = Utc::now().with_timezone(&MARKET.offset());
        match self.try_fetch_candles(symbol, now).await {
            Ok(series) => series,
            Err(e) => {
                log::error!("Error fetching candles for {}: {}", symbol, e);
                Vec::new()
            }
        }
    }
}
