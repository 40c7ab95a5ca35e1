//! Conversion of Slack `ts` tokens to instants.
//!
//! A `ts` is `<seconds>` or `<seconds>.<fraction>`, seconds counted from the Unix
//! epoch. Exports use six fraction digits; up to nine are honored exactly and any
//! further digits are dropped.

use crate::error::TimestampError;
use chrono::{DateTime, Utc};
use tracing::warn;

const NANOS_DIGITS: usize = 9;

/// Parse a `ts` token, rejecting anything outside the documented format.
pub fn parse_slack_ts(ts: &str) -> Result<DateTime<Utc>, TimestampError> {
    let (seconds, fraction) = ts.split_once('.').unwrap_or((ts, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if seconds.is_empty() || !all_digits(seconds) || !all_digits(fraction) {
        return Err(TimestampError::Malformed(ts.to_string()));
    }

    let seconds: i64 = seconds
        .parse()
        .map_err(|_| TimestampError::OutOfRange(ts.to_string()))?;
    let digits = &fraction[..fraction.len().min(NANOS_DIGITS)];
    let nanos = digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(NANOS_DIGITS)
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

    DateTime::<Utc>::from_timestamp(seconds, nanos)
        .ok_or_else(|| TimestampError::OutOfRange(ts.to_string()))
}

/// Total variant of [`parse_slack_ts`]: malformed tokens map to the Unix epoch.
pub fn slack_ts_to_time(ts: &str) -> DateTime<Utc> {
    parse_slack_ts(ts).unwrap_or_else(|err| {
        warn!(%err, "using the Unix epoch for unreadable timestamp");
        DateTime::<Utc>::UNIX_EPOCH
    })
}
