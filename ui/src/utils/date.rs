use jiff::{Timestamp, Zoned, tz::TimeZone};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MINUTE_MS: f64 = 60.0 * 1000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const THIRTY_DAYS_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Parse an RFC 3339 timestamp as sent by the backend.
pub fn to_date(s: &str) -> Result<Timestamp, jiff::Error> {
    s.parse()
}

/// Format as e.g. "january 5, 2024" in the zone of `date`.
pub fn format_date(date: &Zoned) -> String {
    let month = MONTHS[usize::try_from(date.month() - 1).unwrap_or(0)];
    format!("{month} {}, {}", date.day(), date.year())
}

/// [`format_date`] in the system (browser) time zone.
pub fn format_local_date(timestamp: Timestamp) -> String {
    format_date(&timestamp.to_zoned(TimeZone::system()))
}

/// Coarse relative time, e.g. "3 hours ago".
///
/// Months are counted as 30 days and years as 365 days. Counts are rounded
/// to the nearest whole unit, so 90 seconds reads "2 minutes ago".
pub fn time_since(then: Timestamp, now: Timestamp) -> String {
    let elapsed = (now.as_millisecond() - then.as_millisecond()) as f64;

    if elapsed < MINUTE_MS {
        return "right now".to_string();
    }

    let (count, unit) = if elapsed < HOUR_MS {
        (elapsed / MINUTE_MS, "minutes")
    } else if elapsed < DAY_MS {
        (elapsed / HOUR_MS, "hours")
    } else if elapsed < THIRTY_DAYS_MS {
        (elapsed / DAY_MS, "days")
    } else if elapsed < YEAR_MS {
        (elapsed / THIRTY_DAYS_MS, "months")
    } else {
        (elapsed / YEAR_MS, "years")
    };

    format!("{} {unit} ago", count.round() as i64)
}

pub fn time_since_now(then: Timestamp) -> String {
    time_since(then, Timestamp::now())
}
