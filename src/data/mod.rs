// Market data: ISS gateway, wire parsing, series transform
pub mod moex_api;
pub mod series;
pub mod wire;

// Re-export commonly used types
pub use moex_api::{GatewayError, MarketDataSource, MoexClient, filter_securities};
pub use series::to_series;
