//! "Today" and day-offset helpers in the casablanca date format

use chrono::{Days, Local, NaiveDate};

use crate::constants::NCAA_DATE_FORMAT;

/// Today's local date as `YYYY/MM/DD`.
pub fn today_date_string() -> String {
    format_date_offset(0)
}

/// The local date `days` days from now as `YYYY/MM/DD`.
pub fn format_date_offset(days: u32) -> String {
    format_date_offset_from(Local::now().date_naive(), days)
}

/// Deterministic variant of [`format_date_offset`] for a fixed start date.
pub fn format_date_offset_from(start: NaiveDate, days: u32) -> String {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(start)
        .format(NCAA_DATE_FORMAT)
        .to_string()
}
