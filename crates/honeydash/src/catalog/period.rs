//! Quarterly period tokens such as `2015Q1`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::HoneyError;

/// The quarterly windows covered by the colony survey, in chronological order.
pub const KNOWN_PERIODS: [&str; 16] = [
    "2015Q1", "2015Q2", "2015Q3", "2015Q4", "2016Q1", "2016Q2", "2016Q3", "2016Q4", "2017Q1",
    "2017Q2", "2017Q3", "2017Q4", "2018Q1", "2018Q2", "2018Q3", "2018Q4",
];

static PERIOD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})Q([1-4])$").expect("period pattern is valid"));

/// A quarter of a year, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: u16,
    quarter: u8,
}

impl Period {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Whether this is one of the 16 surveyed quarters.
    pub fn is_known(&self) -> bool {
        (2015..=2018).contains(&self.year)
    }

    /// Parse a token and require it to be one of [`KNOWN_PERIODS`].
    pub fn parse_known(token: &str) -> Result<Self, HoneyError> {
        token
            .parse::<Period>()
            .ok()
            .filter(Period::is_known)
            .ok_or_else(|| HoneyError::InvalidPeriod(token.to_string()))
    }

    /// All known periods in chronological order.
    pub fn known() -> impl Iterator<Item = Period> {
        (2015..=2018).flat_map(|year| (1..=4).map(move |quarter| Period { year, quarter }))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

impl FromStr for Period {
    type Err = HoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = PERIOD_PATTERN
            .captures(s.trim())
            .ok_or_else(|| HoneyError::InvalidPeriod(s.to_string()))?;
        let year = caps[1]
            .parse()
            .map_err(|_| HoneyError::InvalidPeriod(s.to_string()))?;
        let quarter = caps[2]
            .parse()
            .map_err(|_| HoneyError::InvalidPeriod(s.to_string()))?;
        Ok(Self { year, quarter })
    }
}

impl TryFrom<String> for Period {
    type Error = HoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
