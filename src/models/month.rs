//! Month identifiers
//!
//! Records are keyed by a `"Mon-YY"` string such as `"Sep-25"`: a three-letter
//! English month abbreviation and the last two digits of the year. Two-digit
//! years are read as 20YY.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, displayed and persisted as `"Mon-YY"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month.to_string()));
        }
        if !(2000..=2099).contains(&year) {
            return Err(MonthParseError::InvalidYear(year.to_string()));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Every month of the previous, current and next calendar year around `today`
    pub fn selectable_range(today: NaiveDate) -> Vec<Self> {
        let year = today.year();
        (year - 1..=year + 1)
            .flat_map(|y| (1..=12).map(move |m| Self { year: y, month: m }))
            .collect()
    }

    /// Parse a `"Mon-YY"` string (abbreviation matched case-insensitively)
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (abbr, yy) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let month = MONTH_ABBREVIATIONS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(abbr))
            .ok_or_else(|| MonthParseError::InvalidMonth(abbr.to_string()))?;

        if yy.len() != 2 || !yy.chars().all(|c| c.is_ascii_digit()) {
            return Err(MonthParseError::InvalidYear(yy.to_string()));
        }
        let yy: i32 = yy
            .parse()
            .map_err(|_| MonthParseError::InvalidYear(yy.to_string()))?;

        Self::new(2000 + yy, month as u32 + 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.abbreviation(), self.year.rem_euclid(100))
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(String),
    InvalidYear(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => {
                write!(f, "Invalid month format '{}' (expected Mon-YY, e.g. Sep-25)", s)
            }
            Self::InvalidMonth(s) => write!(f, "Invalid month: {}", s),
            Self::InvalidYear(s) => write!(f, "Invalid year: {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let key = MonthKey::parse("Sep-25").unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 9);
        assert_eq!(key.to_string(), "Sep-25");

        let lower = MonthKey::parse("sep-25").unwrap();
        assert_eq!(lower, key);
        assert_eq!(lower.to_string(), "Sep-25");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            MonthKey::parse("September"),
            Err(MonthParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            MonthKey::parse("Sept-25"),
            Err(MonthParseError::InvalidMonth(_))
        ));
        assert!(matches!(
            MonthKey::parse("Sep-2025"),
            Err(MonthParseError::InvalidYear(_))
        ));
        assert!(MonthKey::parse("Sep-+5").is_err());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(MonthKey::from_date(date).to_string(), "Jan-26");
    }

    #[test]
    fn test_navigation() {
        let dec = MonthKey::parse("Dec-24").unwrap();
        assert_eq!(dec.next().to_string(), "Jan-25");
        assert_eq!(dec.next().prev(), dec);

        let jan = MonthKey::parse("Jan-25").unwrap();
        assert_eq!(jan.prev().to_string(), "Dec-24");
    }

    #[test]
    fn test_ordering() {
        let aug = MonthKey::parse("Aug-25").unwrap();
        let jan = MonthKey::parse("Jan-26").unwrap();
        assert!(aug < jan);
    }

    #[test]
    fn test_selectable_range() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
        let range = MonthKey::selectable_range(today);
        assert_eq!(range.len(), 36);
        assert_eq!(range.first().unwrap().to_string(), "Jan-24");
        assert_eq!(range.last().unwrap().to_string(), "Dec-26");
        assert!(range.contains(&MonthKey::from_date(today)));
    }

    #[test]
    fn test_new_validates() {
        assert!(MonthKey::new(2025, 0).is_err());
        assert!(MonthKey::new(2025, 13).is_err());
        assert!(MonthKey::new(1999, 5).is_err());
        assert_eq!(MonthKey::new(2025, 9).unwrap().to_string(), "Sep-25");
    }

    #[test]
    fn test_serialization() {
        let key = MonthKey::parse("Sep-25").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Sep-25\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<MonthKey>("\"2025-09\"").is_err());
    }
}
