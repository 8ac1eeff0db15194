//! Free-text request interpretation.
//!
//! A request is reduced to a symbol, a quote/historical intent, a period and an interval.
//! Nothing here fails: every input, including an empty one, yields a best guess.
//!
//! Symbol: the first whole word made of 1–5 uppercase ASCII letters as typed, otherwise
//! the first word found in the [`Ticker`] allow-list, otherwise [`DEFAULT_SYMBOL`].
//!
//! Period and interval: the text is split into lowercase tokens (on anything that is not
//! a letter or digit, and between digits and letters, so `5-day`, `5days` and `5 days`
//! all read `5 day`). Trigger phrases are token sequences; the longest matching phrase
//! wins, then the leftmost, then the one listed first. Matching whole tokens keeps
//! `year` from firing inside `yearly` and `1m` inside `1mo`, and lets `5 year` beat
//! `year`.
use std::sync::LazyLock;

use regex::Regex;
use stock_common::tickers::{DEFAULT_SYMBOL, Ticker};
use stock_common::{Interval, Period, ToolCall};

static UPPERCASE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,5}\b").expect("valid ticker pattern"));

/// Substrings that mark a request as historical.
const HISTORICAL_MARKERS: [&str; 5] = ["historical", "history", "past", "data", "chart"];

type Trigger<T> = (T, &'static [&'static str]);

const PERIOD_TRIGGERS: &[Trigger<Period>] = &[
    (Period::Day1, &["1", "day"]),
    (Period::Day1, &["a", "day"]),
    (Period::Day1, &["today"]),
    (Period::Day5, &["5", "day"]),
    (Period::Day5, &["5", "d"]),
    (Period::Day5, &["a", "week"]),
    (Period::Day5, &["week"]),
    (Period::Month1, &["1", "month"]),
    (Period::Month1, &["1", "mo"]),
    (Period::Month1, &["a", "month"]),
    (Period::Month1, &["month"]),
    (Period::Month1, &["monthly"]),
    (Period::Month3, &["3", "month"]),
    (Period::Month3, &["3", "mo"]),
    (Period::Month3, &["quarter"]),
    (Period::Month3, &["quarterly"]),
    (Period::Month6, &["6", "month"]),
    (Period::Month6, &["6", "mo"]),
    (Period::Month6, &["half", "year"]),
    (Period::Year1, &["1", "year"]),
    (Period::Year1, &["1", "y"]),
    (Period::Year1, &["12", "month"]),
    (Period::Year1, &["a", "year"]),
    (Period::Year1, &["year"]),
    (Period::Year1, &["yearly"]),
    (Period::Year1, &["annual"]),
    (Period::Year2, &["2", "year"]),
    (Period::Year2, &["2", "y"]),
    (Period::Year5, &["5", "year"]),
    (Period::Year5, &["5", "y"]),
    (Period::Year10, &["10", "year"]),
    (Period::Year10, &["10", "y"]),
    (Period::Year10, &["decade"]),
    (Period::YearToDate, &["ytd"]),
    (Period::YearToDate, &["year", "to", "date"]),
    (Period::Max, &["max"]),
    (Period::Max, &["all", "time"]),
];

const INTERVAL_TRIGGERS: &[Trigger<Interval>] = &[
    (Interval::Minute1, &["1", "m"]),
    (Interval::Minute1, &["minute"]),
    (Interval::Minute5, &["5", "m"]),
    (Interval::Minute5, &["5", "minute"]),
    (Interval::Hour1, &["1", "h"]),
    (Interval::Hour1, &["hour"]),
    (Interval::Hour1, &["hourly"]),
    (Interval::Day1, &["1", "d"]),
    (Interval::Day1, &["daily"]),
    (Interval::Week1, &["1", "wk"]),
    (Interval::Week1, &["weekly"]),
];

/// What a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Ticker symbol.
    pub symbol: String,
    /// `true` for a series, `false` for a single quote.
    pub is_historical: bool,
    /// Requested span; left at the default for quotes.
    pub period: Period,
    /// Requested granularity.
    pub interval: Interval,
}

impl ParsedRequest {
    /// Tool invocation that serves this request.
    pub fn to_tool_call(&self) -> ToolCall {
        if self.is_historical {
            ToolCall::historical(&self.symbol, self.period, self.interval)
        } else {
            ToolCall::quote(&self.symbol)
        }
    }
}

/// Rule-based interpreter for free-text stock requests.
pub struct RequestInterpreter;

impl RequestInterpreter {
    /// Interpret `text` into a request.
    pub fn interpret(text: &str) -> ParsedRequest {
        let is_historical = Self::is_historical(text);
        let tokens = tokenize(text);
        ParsedRequest {
            symbol: Self::extract_symbol(text),
            is_historical,
            period: if is_historical {
                best_match(&tokens, PERIOD_TRIGGERS).unwrap_or_default()
            } else {
                Period::default()
            },
            interval: best_match(&tokens, INTERVAL_TRIGGERS).unwrap_or_default(),
        }
    }

    /// First uppercase word, else first allow-listed ticker, else the placeholder.
    pub fn extract_symbol(text: &str) -> String {
        if let Some(m) = UPPERCASE_WORD.find(text) {
            return m.as_str().to_string();
        }
        text.to_lowercase()
            .split_whitespace()
            .find_map(Ticker::recognize)
            .map(|ticker| ticker.to_string())
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string())
    }

    /// `true` if any historical marker occurs in `text`, ignoring case.
    pub fn is_historical(text: &str) -> bool {
        let lowered = text.to_lowercase();
        HISTORICAL_MARKERS.iter().any(|marker| lowered.contains(marker))
    }

    /// Period named in `text`, defaulting to one month.
    pub fn infer_period(text: &str) -> Period {
        best_match(&tokenize(text), PERIOD_TRIGGERS).unwrap_or_default()
    }

    /// Interval named in `text`, defaulting to daily.
    pub fn infer_interval(text: &str) -> Interval {
        best_match(&tokenize(text), INTERVAL_TRIGGERS).unwrap_or_default()
    }
}

/// Lowercase word tokens, split between digits and letters, with number words turned
/// into digits and plural units made singular.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if !c.is_ascii_alphanumeric() {
            push_token(&mut tokens, &mut current);
            continue;
        }
        if !current.is_empty() && c.is_ascii_digit() != current_is_digit {
            push_token(&mut tokens, &mut current);
        }
        current_is_digit = c.is_ascii_digit();
        current.push(c);
    }
    push_token(&mut tokens, &mut current);
    tokens
}

fn push_token(tokens: &mut Vec<String>, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    let normalized = match word.as_str() {
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "five" => "5",
        "six" => "6",
        "ten" => "10",
        "twelve" => "12",
        "days" => "day",
        "weeks" => "week",
        "months" => "month",
        "years" => "year",
        "minutes" | "min" | "mins" => "minute",
        "hours" | "hr" | "hrs" => "hour",
        "quarters" => "quarter",
        other => other,
    };
    tokens.push(normalized.to_string());
}

fn best_match<T: Copy>(tokens: &[String], triggers: &[Trigger<T>]) -> Option<T> {
    // (phrase length, start position, value)
    let mut best: Option<(usize, usize, T)> = None;

    for &(value, phrase) in triggers {
        let Some(start) = find_phrase(tokens, phrase) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((len, pos, _)) => phrase.len() > len || (phrase.len() == len && start < pos),
        };
        if better {
            best = Some((phrase.len(), start, value));
        }
    }
    best.map(|(_, _, value)| value)
}

fn find_phrase(tokens: &[String], phrase: &[&str]) -> Option<usize> {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return None;
    }
    tokens.windows(phrase.len()).position(|window| {
        window
            .iter()
            .zip(phrase)
            .all(|(token, expected)| token == expected)
    })
}
