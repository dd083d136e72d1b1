use chrono::{DateTime, Utc};

/// Relative time stamp shown next to posts and messages.
///
/// Timestamps in the future collapse to "just now". Anything older than a week is
/// shown as an absolute `yyyy-MM-dd HH:MM`.
pub fn since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }

    then.format("%Y-%m-%d %H:%M").to_string()
}

/// `since` for optional timestamps, e.g. a post that was never edited.
pub fn since_opt(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    then.map(|t| since(t, now))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
