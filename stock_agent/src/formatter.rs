//! Rendering of tool results as terminal text.
//!
//! Quotes print as a fixed block; histories print a header and one line per row, cut
//! down to the first and last five rows (with a `...` line between) once there are more
//! than ten.
use stock_common::{HistoricalRecord, HistoricalRow, QuoteRecord, ToolOutput, ToolResult};

/// Series up to this many rows are printed in full.
const MAX_FULL_ROWS: usize = 10;
/// Rows kept from each end of a longer series.
const EDGE_ROWS: usize = 5;

/// Formats tool results for display.
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Render `result` of a request for `symbol`. `historical` selects the wording of
    /// error lines.
    pub fn format(result: &ToolResult, symbol: &str, historical: bool) -> String {
        match result {
            Ok(ToolOutput::Quote(quote)) => Self::format_quote(quote),
            Ok(ToolOutput::Historical(record)) => Self::format_historical(record),
            Err(err) => {
                let payload = err.to_payload();
                let what = if historical { "historical data" } else { "quote" };
                format!(
                    "Error fetching {} for {}: {}",
                    what,
                    payload.symbol.as_deref().unwrap_or(symbol),
                    payload.error
                )
            }
        }
    }

    /// Fixed block: header, then Open/High/Low/Close with two decimals and raw volume.
    pub fn format_quote(quote: &QuoteRecord) -> String {
        format!(
            "{} on {}:\n  Open:  {:.2}\n  High:  {:.2}\n  Low:   {:.2}\n  Close: {:.2}\n  Vol:   {}",
            quote.symbol, quote.date, quote.open, quote.high, quote.low, quote.close, quote.volume
        )
    }

    /// Header plus rows, truncated to head and tail past ten rows.
    pub fn format_historical(record: &HistoricalRecord) -> String {
        let mut out = format!(
            "{} historical data (period={}, interval={}): {} data points",
            record.symbol, record.period, record.interval, record.data_points
        );

        let rows = &record.data;
        if rows.len() <= MAX_FULL_ROWS {
            for row in rows {
                push_row(&mut out, row);
            }
        } else {
            for row in &rows[..EDGE_ROWS] {
                push_row(&mut out, row);
            }
            out.push_str("\n  ...");
            for row in &rows[rows.len() - EDGE_ROWS..] {
                push_row(&mut out, row);
            }
        }
        out
    }
}

fn push_row(out: &mut String, row: &HistoricalRow) {
    out.push_str(&format!(
        "\n  {}: O={:.2} H={:.2} L={:.2} C={:.2} V={}",
        row.date,
        row.open,
        row.high,
        row.low,
        row.close,
        group_thousands(row.volume)
    ));
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
