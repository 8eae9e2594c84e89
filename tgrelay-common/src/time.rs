use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Everything the bot reports and logs is rendered in this fixed zone.
pub const LOCAL_TZ: Tz = chrono_tz::America::Asuncion;

/// Render a timestamp in the local zone, without fractional seconds.
pub fn format_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&LOCAL_TZ)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Pick the event time: the action message's date wins, then the raw
/// update's date, then the current time.
pub fn resolve_event_time(
    action_date: Option<DateTime<Utc>>,
    update_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    action_date.or(update_date).unwrap_or(now)
}
