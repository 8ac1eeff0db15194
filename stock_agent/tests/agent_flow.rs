use std::io::Cursor;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use stock_agent::{StockAgent, session};
use stock_common::{Bar, Interval, Period, ProviderError};
use stock_server::{MarketDataProvider, StockServer};

/// Provider serving `rows` daily bars per request, or failing with `failure`.
struct ScriptedProvider {
    rows: u32,
    failure: Option<ProviderError>,
    requests: Mutex<Vec<(String, Period, Interval)>>,
}

impl ScriptedProvider {
    fn with_rows(rows: u32) -> Arc<Self> {
        Arc::new(ScriptedProvider {
            rows,
            failure: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(failure: ProviderError) -> Arc<Self> {
        Arc::new(ScriptedProvider {
            rows: 0,
            failure: Some(failure),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last_request(&self) -> (String, Period, Interval) {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl MarketDataProvider for ScriptedProvider {
    fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((symbol.to_string(), period, interval));
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Ok((0..self.rows)
            .map(|i| Bar {
                time: (start + chrono::Days::new(u64::from(i)))
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                open: 100.0,
                high: 102.0,
                low: 99.0,
                close: 101.0 + f64::from(i),
                volume: 2_500_000,
            })
            .collect())
    }
}

#[test]
fn quote_request_end_to_end() {
    let provider = ScriptedProvider::with_rows(1);
    let server = StockServer::new(provider.clone());
    let agent = StockAgent::new(&server);

    let response = agent.handle_request("quote MSFT");

    assert_eq!(
        response,
        "MSFT on 2025-01-01:\n  Open:  100.00\n  High:  102.00\n  Low:   99.00\n  Close: 101.00\n  Vol:   2500000"
    );
    assert_eq!(
        provider.last_request(),
        ("MSFT".to_string(), Period::Day1, Interval::Day1)
    );
}

#[test]
fn historical_request_end_to_end() {
    let provider = ScriptedProvider::with_rows(12);
    let server = StockServer::new(provider.clone());
    let agent = StockAgent::new(&server);

    let response = agent.handle_request("NVDA 1 year historical data");

    let lines: Vec<&str> = response.lines().collect();
    assert_eq!(
        lines[0],
        "NVDA historical data (period=1y, interval=1d): 12 data points"
    );
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[6], "  ...");
    assert_eq!(
        lines[1],
        "  2025-01-01: O=100.00 H=102.00 L=99.00 C=101.00 V=2,500,000"
    );
    assert_eq!(
        provider.last_request(),
        ("NVDA".to_string(), Period::Year1, Interval::Day1)
    );
}

#[test]
fn documented_phrases_reach_the_provider_as_expected() {
    let provider = ScriptedProvider::with_rows(3);
    let server = StockServer::new(provider.clone());
    let agent = StockAgent::new(&server);

    let cases = [
        ("MSFT historical data 1 month", "MSFT", Period::Month1),
        ("TSLA past 5 days", "TSLA", Period::Day5),
        ("GOOGL quarterly data", "GOOGL", Period::Month3),
        ("NVDA 5 year historical data", "NVDA", Period::Year5),
    ];
    for (phrase, symbol, period) in cases {
        agent.handle_request(phrase);
        assert_eq!(
            provider.last_request(),
            (symbol.to_string(), period, Interval::Day1),
            "phrase: {}",
            phrase
        );
    }
}

#[test]
fn provider_failure_becomes_error_line() {
    let provider = ScriptedProvider::failing(ProviderError::Network(
        "operation timed out".to_string(),
    ));
    let server = StockServer::new(provider);
    let agent = StockAgent::new(&server);

    assert_eq!(
        agent.handle_request("AAPL"),
        "Error fetching quote for AAPL: Failed to fetch data: Network error: operation timed out"
    );
    assert_eq!(
        agent.handle_request("AAPL history"),
        "Error fetching historical data for AAPL: Failed to fetch data: Network error: operation timed out"
    );
}

#[test]
fn empty_history_becomes_error_line() {
    let server = StockServer::new(ScriptedProvider::with_rows(0));
    let agent = StockAgent::new(&server);

    assert_eq!(
        agent.handle_request("ZZZZ chart"),
        "Error fetching historical data for ZZZZ: No data found for symbol 'ZZZZ' (period=1mo, interval=1d)."
    );
}

#[test]
fn session_answers_until_exit() {
    let provider = ScriptedProvider::with_rows(1);
    let server = StockServer::new(provider.clone());
    let agent = StockAgent::new(&server);

    let input = Cursor::new("quote TSLA\n\n   \nQUIT\nquote MSFT\n");
    let mut output = Vec::new();
    session::run(&agent, input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Agent:\n").count(), 1);
    assert!(text.contains("TSLA on 2025-01-01:"));
    assert!(!text.contains("MSFT on"));
    assert_eq!(provider.requests.lock().unwrap().len(), 1);
}

#[test]
fn session_ends_at_end_of_input() {
    let server = StockServer::new(ScriptedProvider::with_rows(1));
    let agent = StockAgent::new(&server);

    let input = Cursor::new("AAPL\nNVDA");
    let mut output = Vec::new();
    session::run(&agent, input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Agent:\n").count(), 2);
    assert!(text.contains("NVDA on 2025-01-01:"));
}

#[test]
fn session_survives_unreadable_line() {
    let server = StockServer::new(ScriptedProvider::with_rows(1));
    let agent = StockAgent::new(&server);

    // Invalid UTF-8 on the first line, then a valid request.
    let mut bytes = vec![0xff, 0xfe, b'\n'];
    bytes.extend_from_slice(b"quote AAPL\nexit\n");
    let mut output = Vec::new();
    session::run(&agent, Cursor::new(bytes), &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("An error occurred: "));
    assert!(text.contains("AAPL on 2025-01-01:"));
}
