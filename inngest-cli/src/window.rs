use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::InngestError;

const RECEIVED_AFTER_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `--since` value: a whole number of minutes written as `{int}m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    minutes: i64,
}

impl TimeWindow {
    pub fn minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    pub fn received_after(&self, now: DateTime<Utc>) -> String {
        (now - Duration::minutes(self.minutes))
            .format(RECEIVED_AFTER_FORMAT)
            .to_string()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::minutes(5)
    }
}

impl FromStr for TimeWindow {
    type Err = InngestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| Regex::new(r"^(\d+)m$").expect("valid pattern"));

        pattern
            .captures(value)
            .and_then(|captures| captures[1].parse::<u32>().ok())
            .map(|minutes| Self::minutes(i64::from(minutes)))
            .ok_or_else(|| InngestError::InvalidWindow(value.to_string()))
    }
}
