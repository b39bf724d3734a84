use time::macros::format_description;
use time::Date;

/// Formats a date as the ISO `YYYY-MM-DD` key used for weekly plans.
pub fn format_iso(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a date the way it is shown to the user, `DD.MM.YYYY`.
pub fn format_display(date: Date) -> String {
    format!(
        "{:02}.{:02}.{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

pub fn parse_iso(text: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(text.trim(), &format).ok()
}

#[cfg(test)]
mod date_tests {
    use super::*;
    use time::{Date, Month};

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid date")
    }

    #[test]
    fn iso_roundtrip() {
        let d = date(2024, Month::August, 15);
        assert_eq!(format_iso(d), "2024-08-15");
        assert_eq!(parse_iso("2024-08-15"), Some(d));
    }

    #[test]
    fn parse_iso_rejects_garbage() {
        assert_eq!(parse_iso("sutra"), None);
        assert_eq!(parse_iso("2024-13-01"), None);
        assert_eq!(parse_iso(""), None);
    }

    #[test]
    fn display_format_is_zero_padded() {
        assert_eq!(format_display(date(2024, Month::March, 5)), "05.03.2024");
    }
}
