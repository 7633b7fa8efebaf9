//! MOEX ISS (Moscow Exchange Informational & Statistical Server) configuration.

/// Configuration for the ISS REST client
/// (This is the runtime struct used by `MoexClient`)
#[derive(Debug, Clone)]
pub struct MoexApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for MoexApiConfig {
    fn default() -> Self {
        Self {
            base_url: MOEX.base_url.to_string(),
            timeout_ms: MOEX.client.timeout_ms,
        }
    }
}

impl MoexApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

/// Candle request shape
pub struct CandleQuery {
    /// ISS candle interval code (1 = 1 minute, 10 = 10 minutes, 60 = 1 hour, 24 = 1 day)
    pub interval: u32,
    /// Number of most recent candles requested
    pub limit: u32,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// The Master Configuration Struct
pub struct MoexConfig {
    pub base_url: &'static str,
    /// Board group listing the main-market shares (TQBR and friends)
    pub board_group: u32,
    pub candles: CandleQuery,
    pub client: ClientDefaults,
}

pub const MOEX: MoexConfig = MoexConfig {
    base_url: "https://iss.moex.com",
    board_group: 57,
    candles: CandleQuery {
        interval: 10,
        // 72 x 10m = 12 trading hours
        limit: 72,
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};
