/// Time value shown when a timestamp cannot be split into date and time.
pub const NOT_APPLICABLE: &str = "N/A";

/// Splits a raw timestamp token into `(date, time)` for display.
///
/// ISO-8601 style tokens split at the first `T`. Otherwise the first two
/// whitespace-separated words are used. Anything else is returned whole as
/// the date with [`NOT_APPLICABLE`] as the time.
pub fn split_timestamp(raw: &str) -> (&str, &str) {
    if let Some((date, time)) = raw.split_once('T') {
        return (date, time);
    }

    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(date), Some(time)) => (date, time),
        _ => (raw, NOT_APPLICABLE),
    }
}
