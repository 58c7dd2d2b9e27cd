//! Wall-clock access for the time and date replies.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Formats a time as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Formats a date in long form, e.g. `January 2, 2006`.
pub fn format_date(at: &DateTime<Local>) -> String {
    at.format("%B %-d, %Y").to_string()
}
