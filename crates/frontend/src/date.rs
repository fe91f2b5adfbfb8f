use chrono::{DateTime, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn rounded_div(value: i64, by: i64) -> i64 {
    (value as f64 / by as f64).round() as i64
}

/// Human distance between two instants, in the coarse buckets a feed shows.
pub fn format_distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_seconds().abs();
    let minutes = rounded_div(seconds, 60);

    if minutes < 1 {
        String::from("less than a minute")
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        String::from("about 1 hour")
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural(rounded_div(minutes, 60), "hour"))
    } else if minutes < 2520 {
        String::from("1 day")
    } else if minutes < MINUTES_IN_MONTH {
        plural(rounded_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!(
            "about {}",
            plural(rounded_div(minutes, MINUTES_IN_MONTH), "month")
        )
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            return plural(months, "month");
        }

        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", format_distance(created_at, now))
}
