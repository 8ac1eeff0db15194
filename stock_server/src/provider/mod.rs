//! Market-data providers.
//!
//! Tools only see the [`MarketDataProvider`] trait; the Yahoo implementation lives in
//! `yahoo` and tests plug in their own in-memory providers.
use stock_common::{Bar, Interval, Period, ProviderError};

pub mod yahoo;

pub use yahoo::{YahooConfig, YahooProvider};

/// Source of OHLCV bars.
pub trait MarketDataProvider: Send + Sync {
    /// Fetch bars for `symbol` covering `period`, sampled every `interval`.
    ///
    /// Bars are returned oldest first. An empty list means the provider answered but had
    /// nothing for the request; any failure to obtain an answer is a `ProviderError`.
    fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, ProviderError>;
}
