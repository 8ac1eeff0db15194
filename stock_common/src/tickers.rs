//! Known ticker symbols used as a fallback when a request has no uppercase symbol.
//!
//! The list is deliberately limited to symbols that do not double as everyday English
//! words ("low", "cat", "so", single letters), because it is matched against lowercase
//! prose.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Symbol used when nothing in a request looks like a ticker.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Set of ticker symbols recognised in lowercase text.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    AAPL,
    MSFT,
    GOOGL,
    GOOG,
    AMZN,
    NVDA,
    META,
    TSLA,
    JPM,
    JNJ,
    UNH,
    PYPL,
    NFLX,
    ADBE,
    CRM,
    INTC,
    CSCO,
    PFE,
    ABBV,
    LLY,
    PEP,
    COST,
    TXN,
    AVGO,
    QCOM,
    NKE,
    ORCL,
    AMGN,
    SBUX,
    INTU,
    ISRG,
    BKNG,
    AMD,
    IBM,
    UBER,
    SHOP,
    SPY,
    QQQ,
}

impl Ticker {
    /// Match a single word against the allow-list, ignoring case and surrounding
    /// punctuation (`"msft?"` → `MSFT`).
    pub fn recognize(word: &str) -> Option<Ticker> {
        let cleaned: String = word.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_lowercase_words_with_punctuation() {
        assert_eq!(Ticker::recognize("nvda,"), Some(Ticker::NVDA));
        assert_eq!(Ticker::recognize("(googl)"), Some(Ticker::GOOGL));
        assert_eq!(Ticker::recognize("Tsla?"), Some(Ticker::TSLA));
    }

    #[test]
    fn ignores_ordinary_words() {
        assert_eq!(Ticker::recognize("price"), None);
        assert_eq!(Ticker::recognize("low"), None);
        assert_eq!(Ticker::recognize("!!"), None);
    }

    #[test]
    fn displays_as_symbol() {
        assert_eq!(Ticker::AMZN.to_string(), "AMZN");
    }
}
