//! Period and interval tokens.
//!
//! Both enums round-trip through the short tokens the upstream chart API uses
//! (`1mo`, `1y`, `1d`, `1wk`, ...), via `strum` for plain strings and via `serde` for
//! tool arguments.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Total span of history to request.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Period {
    /// One trading day.
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    Day1,
    /// Five trading days.
    #[strum(serialize = "5d")]
    #[serde(rename = "5d")]
    Day5,
    /// One month.
    #[default]
    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    Month1,
    /// Three months.
    #[strum(serialize = "3mo")]
    #[serde(rename = "3mo")]
    Month3,
    /// Six months.
    #[strum(serialize = "6mo")]
    #[serde(rename = "6mo")]
    Month6,
    /// One year.
    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    Year1,
    /// Two years.
    #[strum(serialize = "2y")]
    #[serde(rename = "2y")]
    Year2,
    /// Five years.
    #[strum(serialize = "5y")]
    #[serde(rename = "5y")]
    Year5,
    /// Ten years.
    #[strum(serialize = "10y")]
    #[serde(rename = "10y")]
    Year10,
    /// Since the first trading day of the current year.
    #[strum(serialize = "ytd")]
    #[serde(rename = "ytd")]
    YearToDate,
    /// Everything the provider has.
    #[strum(serialize = "max")]
    #[serde(rename = "max")]
    Max,
}

/// Sampling granularity within a period.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Interval {
    /// One minute bars.
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    Minute1,
    /// Five minute bars.
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    Minute5,
    /// Fifteen minute bars.
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    Minute15,
    /// Thirty minute bars.
    #[strum(serialize = "30m")]
    #[serde(rename = "30m")]
    Minute30,
    /// Hourly bars.
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars.
    #[default]
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    Day1,
    /// Weekly bars.
    #[strum(serialize = "1wk")]
    #[serde(rename = "1wk")]
    Week1,
    /// Monthly bars.
    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    Month1,
}

impl Interval {
    /// `true` for bars shorter than a trading day.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Interval::Minute1
                | Interval::Minute5
                | Interval::Minute15
                | Interval::Minute30
                | Interval::Hour1
        )
    }

    /// Value sent in the `interval` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour1 => "60m",
            Interval::Day1 => "1d",
            Interval::Week1 => "1wk",
            Interval::Month1 => "1mo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_and_display() {
        assert_eq!("3mo".parse::<Period>(), Ok(Period::Month3));
        assert_eq!(Period::YearToDate.to_string(), "ytd");
        assert_eq!("1wk".parse::<Interval>(), Ok(Interval::Week1));
        assert_eq!(Interval::Hour1.to_string(), "1h");
        assert!("2w".parse::<Period>().is_err());
    }

    #[test]
    fn defaults_are_one_month_daily() {
        assert_eq!(Period::default(), Period::Month1);
        assert_eq!(Interval::default(), Interval::Day1);
    }

    #[test]
    fn hourly_is_sent_as_sixty_minutes() {
        assert_eq!(Interval::Hour1.query_value(), "60m");
        assert!(Interval::Hour1.is_intraday());
        assert!(!Interval::Week1.is_intraday());
    }

    #[test]
    fn serde_uses_short_tokens() {
        let json = serde_json::to_string(&Period::Year5).unwrap();
        assert_eq!(json, "\"5y\"");
        let interval: Interval = serde_json::from_str("\"5m\"").unwrap();
        assert_eq!(interval, Interval::Minute5);
    }
}
