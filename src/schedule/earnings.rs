// src/schedule/earnings.rs

use tracing::warn;

/// Stand-in for a tournament with no `championEarnings` field.
pub const MISSING_EARNINGS: &str = "$0";

/// Which cleaned earnings strings count as an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarningsPolicy {
    /// Only plain digit runs. `"1234.56"` is zero.
    #[default]
    DigitsOnly,
    /// Digit runs, optionally followed by `.` and more digits.
    AllowCents,
}

impl EarningsPolicy {
    pub fn accepts(self, cleaned: &str) -> bool {
        match self {
            EarningsPolicy::DigitsOnly => is_all_digits(cleaned),
            EarningsPolicy::AllowCents => match cleaned.split_once('.') {
                Some((dollars, cents)) => is_all_digits(dollars) && is_all_digits(cents),
                None => is_all_digits(cleaned),
            },
        }
    }
}

/// Non-empty and ASCII digits only: no sign, no decimal point.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Drop `$` and thousands separators.
pub fn clean_earnings(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '$' | ',')).collect()
}

/// Turn a raw purse string into an amount; anything the policy rejects is zero.
pub fn parse_earnings(raw: Option<&str>, policy: EarningsPolicy) -> f64 {
    let raw = raw.unwrap_or(MISSING_EARNINGS);
    let cleaned = clean_earnings(raw);
    if !policy.accepts(&cleaned) {
        warn!(raw, ?policy, "Unrecognised earnings; counting as zero");
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}
