//! Yahoo Finance chart API provider.
//!
//! Issues `GET {base_url}/{SYMBOL}?range={period}&interval={interval}` with a blocking
//! `reqwest` client and decodes the v8 chart payload. Timestamps are shifted by the
//! exchange `gmtoffset` reported in `meta`, so daily bars land on the exchange's trading
//! date rather than the UTC one. Rows with any missing OHLCV field are skipped.
use std::error::Error;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime};
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use stock_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT, chart_url};
use stock_common::{Bar, Interval, Period, ProviderError};

use super::MarketDataProvider;

/// Error code the chart API uses for unknown symbols.
const NOT_FOUND_CODE: &str = "Not Found";

/// Connection settings for [`YahooProvider`].
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Chart endpoint without the symbol segment.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        YahooConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Provider backed by the Yahoo Finance chart API.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Build the HTTP client for `config`.
    pub fn new(config: YahooConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(network_error)?;

        Ok(YahooProvider {
            client,
            base_url: config.base_url,
        })
    }
}

impl MarketDataProvider for YahooProvider {
    fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, ProviderError> {
        let url = chart_url(&self.base_url, symbol);
        debug!("GET {} range={} interval={}", url, period, interval.query_value());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", period.to_string().as_str()),
                ("interval", interval.query_value()),
            ])
            .send()
            .map_err(network_error)?;

        let status = response.status();
        let body = response
            .text()
            .map_err(network_error)?;

        if !status.is_success() {
            // Unknown symbols come back as 404 with a chart error in the body.
            if let Ok(ChartResponse {
                chart: Chart {
                    error: Some(err), ..
                },
            }) = serde_json::from_str::<ChartResponse>(&body)
            {
                return Err(err.into_provider_error());
            }
            warn!("Chart request for {} failed with HTTP {}", symbol, status);
            return Err(ProviderError::Network(format!("HTTP {}", status)));
        }

        let bars = parse_chart(&body)?;
        debug!("Received {} bars for {}", bars.len(), symbol);
        Ok(bars)
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

impl ChartError {
    fn into_provider_error(self) -> ProviderError {
        if self.code == NOT_FOUND_CODE {
            ProviderError::NotFound(self.description)
        } else {
            ProviderError::Api(format!("{}: {}", self.code, self.description))
        }
    }
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    meta: Option<ChartMeta>,
    // Absent when the range holds no trades.
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<QuoteSeries>,
}

#[derive(Deserialize, Debug)]
struct QuoteSeries {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Decode a chart API body into bars.
pub fn parse_chart(body: &str) -> Result<Vec<Bar>, ProviderError> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if let Some(err) = response.chart.error {
        return Err(err.into_provider_error());
    }

    let Some(result) = response.chart.result.and_then(|mut r| r.pop()) else {
        return Ok(Vec::new());
    };
    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| ProviderError::Parse("No quote data".to_string()))?;
    let offset = result.meta.and_then(|m| m.gmtoffset).unwrap_or(0);

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
            quote.volume.get(i).copied().flatten(),
        ) {
            bars.push(Bar {
                time: local_time(ts, offset)?,
                open,
                high,
                low,
                close,
                volume: volume.max(0.0).round() as u64,
            });
        }
    }
    Ok(bars)
}

fn local_time(ts: i64, offset: i64) -> Result<NaiveDateTime, ProviderError> {
    ts.checked_add(offset)
        .and_then(|local| DateTime::from_timestamp(local, 0))
        .map(|t| t.naive_utc())
        .ok_or_else(|| ProviderError::Parse(format!("Timestamp out of range: {}", ts)))
}

fn network_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Network(error_chain(&err))
}

/// `err` followed by each cause not already part of the message, `: `-separated.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
