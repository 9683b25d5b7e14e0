//! Local Time Label
//!
//! Wall-clock time in the owner's timezone, formatted like `3:07 PM`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone name, falling back to Los Angeles
pub fn zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        log::warn!("unknown timezone {:?}, using America/Los_Angeles", name);
        chrono_tz::America::Los_Angeles
    })
}

pub fn time_label(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format("%-I:%M %p").to_string()
}

pub fn local_time_now(zone: Tz) -> String {
    time_label(Utc::now(), zone)
}
