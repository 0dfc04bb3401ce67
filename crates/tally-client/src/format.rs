//! Display helpers for amounts, timestamps and settlement status.
//!
//! Output follows en-US conventions with USD as the currency.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

const PROCESSING_WINDOW_DAYS: i64 = 2;

/// Formats a signed amount as USD: `-1234.5` renders as `-$1,234.50`.
///
/// Non-finite values render as `$0.00`. Amounts that round to zero cents
/// carry no sign.
pub fn format_amount(amount: f64) -> String {
    let value = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.chars().chain(cents.chars()).all(|ch| ch == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDateTime {
    /// `Wed, Oct 25, 8:30 PM`
    pub date_time: String,
    /// `Wed, 10/25/2023`
    pub date_day: String,
    /// `Oct 25, 2023`
    pub date_only: String,
    /// `8:30 PM`
    pub time_only: String,
}

pub fn format_date_time(value: &NaiveDateTime) -> FormattedDateTime {
    FormattedDateTime {
        date_time: value.format("%a, %b %-d, %-I:%M %p").to_string(),
        date_day: value.format("%a, %m/%d/%Y").to_string(),
        date_only: value.format("%b %-d, %Y").to_string(),
        time_only: value.format("%-I:%M %p").to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    Processing,
    Success,
}

/// Transactions newer than two days before `now` are still processing.
pub fn transaction_status(date: &NaiveDateTime, now: &NaiveDateTime) -> TransactionStatus {
    let cutoff = *now - Duration::days(PROCESSING_WINDOW_DAYS);
    if *date > cutoff {
        TransactionStatus::Processing
    } else {
        TransactionStatus::Success
    }
}
