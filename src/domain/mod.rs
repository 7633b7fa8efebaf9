// Domain types and value objects
pub mod candle;
pub mod security;

// Re-export commonly used types
pub use candle::CandlePoint;
pub use security::SecurityRef;
