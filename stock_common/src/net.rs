//! Provider endpoint constants and helpers used by the server and the agent.

/// Yahoo Finance v8 chart endpoint; the symbol is appended as a path segment.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
/// Default HTTP timeout for a provider request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Browser-like User-Agent; the chart endpoint rejects obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Helper to build the chart URL for `symbol` like "base/SYMBOL".
pub fn chart_url(base_url: &str, symbol: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_tolerates_trailing_slash() {
        assert_eq!(
            chart_url("http://localhost:9000/chart/", "MSFT"),
            "http://localhost:9000/chart/MSFT"
        );
    }
}
