// src/config.rs

use chrono::{Datelike, Local};
use std::time::Duration;
use url::Url;

use crate::schedule::EarningsPolicy;

/// Schedule pages live at `<BASE_URL><year>`; the bare URL is the current season.
pub const BASE_URL: &str = "https://www.pgatour.com/schedule/";
pub const TIMEOUT_SECONDS: u64 = 10;
/// Exclusive lower bound for `--year`.
pub const MIN_VALID_YEAR: i32 = 2012;
/// `id` of the `<script>` element carrying the server-rendered state.
pub const PAYLOAD_SCRIPT_ID: &str = "__NEXT_DATA__";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BASE_URL).expect("BASE_URL should parse"),
            timeout: Duration::from_secs(TIMEOUT_SECONDS),
        }
    }
}

/// Knobs for the aggregation fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub policy: EarningsPolicy,
    /// Record the month on every ledger entry.
    pub include_month: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            policy: EarningsPolicy::DigitsOnly,
            include_month: true,
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Accept exactly four characters forming a year in `(MIN_VALID_YEAR, current_year]`.
pub fn valid_year(input: &str, current_year: i32) -> Result<i32, String> {
    let invalid = || {
        format!(
            "Invalid year: {}. Year must be between {} and {}.",
            input, MIN_VALID_YEAR, current_year
        )
    };
    if input.len() != 4 {
        return Err(invalid());
    }
    let year: i32 = input.parse().map_err(|_| invalid())?;
    if year <= MIN_VALID_YEAR || year > current_year {
        return Err(invalid());
    }
    Ok(year)
}

/// `clap` value parser for `--year`.
pub fn parse_year(input: &str) -> Result<i32, String> {
    valid_year(input, current_year())
}
