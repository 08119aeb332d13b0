use chrono::{DateTime, Utc};

/// Units in descending order. Only the first (largest) unit that fits is reported.
const UNITS: [(&str, i64); 6] = [
    ("y", 31_536_000),
    ("mo", 2_592_000),
    ("w", 604_800),
    ("d", 86_400),
    ("h", 3_600),
    ("m", 60),
];

/// Format `past` relative to `now` as a compact "time ago" string.
///
/// Anything under a minute, including timestamps in the future, is "just now".
pub fn relative_time(past: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(past).num_seconds();

    UNITS
        .iter()
        .find_map(|&(abbr, secs)| {
            let quotient = elapsed / secs;
            (quotient >= 1).then(|| format!("{quotient}{abbr} ago"))
        })
        .unwrap_or_else(|| "just now".to_string())
}
