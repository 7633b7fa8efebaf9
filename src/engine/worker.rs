//! Fetch jobs: run the gateway off the UI thread and tag results for the controller.

use std::sync::Arc;

use poll_promise::Promise;

use crate::data::MarketDataSource;
use crate::engine::messages::{CandleResponse, FetchTicket, SearchResponse};
use crate::utils::app_time::now;

/// Fetch the series for `ticket` and wrap it with the ticket it belongs to.
pub async fn load_candles<S>(source: &S, ticket: FetchTicket) -> CandleResponse
where
    S: MarketDataSource + ?Sized,
{
    let started = now();
    let series = source.fetch_candles(&ticket.symbol).await;

    log::debug!(
        "Fetched {} candles for {} in {:.2}s",
        series.len(),
        ticket.symbol,
        started.elapsed().as_secs_f32()
    );

    CandleResponse {
        ticket,
        result: Ok(series),
    }
}

pub async fn load_search<S>(source: &S, query: String) -> SearchResponse
where
    S: MarketDataSource + ?Sized,
{
    let securities = source.search_securities(&query).await;
    SearchResponse { query, securities }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_candle_fetch<S>(source: Arc<S>, ticket: FetchTicket) -> Promise<CandleResponse>
where
    S: MarketDataSource + Send + Sync + 'static,
{
    Promise::spawn_async(async move { load_candles(source.as_ref(), ticket).await })
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_candle_fetch<S>(source: Arc<S>, ticket: FetchTicket) -> Promise<CandleResponse>
where
    S: MarketDataSource + 'static,
{
    Promise::spawn_local(async move { load_candles(source.as_ref(), ticket).await })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_search<S>(source: Arc<S>, query: String) -> Promise<SearchResponse>
where
    S: MarketDataSource + Send + Sync + 'static,
{
    Promise::spawn_async(async move { load_search(source.as_ref(), query).await })
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_search<S>(source: Arc<S>, query: String) -> Promise<SearchResponse>
where
    S: MarketDataSource + 'static,
{
    Promise::spawn_local(async move { load_search(source.as_ref(), query).await })
}
