/// Utilities for date and greeting formatting
///
/// Provides consistent date formatting across the application

use chrono::{Datelike, Local, NaiveDate, Timelike};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO date string to long form
/// Example: "2024-03-15" -> "March 15, 2024"
pub fn format_date_long(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => format!("{} {}, {}", MONTHS[d.month0() as usize], d.day(), d.year()),
        Err(_) => date_str.to_string(),
    }
}

/// Today's date in long form, as shown in the header.
pub fn current_date_long() -> String {
    let now = Local::now();
    format!("{} {}, {}", MONTHS[now.month0() as usize], now.day(), now.year())
}

/// Dashboard greeting for a local hour of day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

/// Today's date, for voucher expiry checks.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2024-03-15"), "March 15, 2024");
        assert_eq!(format_date_long("2024-12-31"), "December 31, 2024");
    }

    #[test]
    fn test_invalid_date_passes_through() {
        assert_eq!(format_date_long("2 days ago"), "2 days ago");
        assert_eq!(format_date_long(""), "");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }
}
