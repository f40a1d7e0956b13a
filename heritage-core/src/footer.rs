use chrono::{DateTime, Datelike, Local, TimeZone};

/// Calendar year shown in the page footer for the given instant.
pub fn footer_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

/// Footer year for the local clock.
pub fn current_year() -> i32 {
    footer_year(&Local::now())
}
