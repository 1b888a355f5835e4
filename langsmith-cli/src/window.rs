use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::LangSmithError;

const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Look-back window such as `15m`. The trailing `m` may be omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    minutes: i64,
}

impl TimeWindow {
    pub fn minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Naive UTC start of the window, second precision, no zone suffix.
    pub fn start_time(&self, now: DateTime<Utc>) -> String {
        (now - Duration::minutes(self.minutes))
            .format(START_TIME_FORMAT)
            .to_string()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::minutes(5)
    }
}

fn window_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)m?$").expect("window pattern is valid"))
}

impl FromStr for TimeWindow {
    type Err = LangSmithError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        window_pattern()
            .captures(value.trim())
            .and_then(|captures| captures[1].parse::<u32>().ok())
            .map(|minutes| Self::minutes(i64::from(minutes)))
            .ok_or_else(|| LangSmithError::InvalidWindow(value.to_string()))
    }
}
