use lazy_static::lazy_static;
use regex::Regex;
use time::{Date, Duration, Month};

use crate::lexicon::Lexicon;

lazy_static! {
    static ref DOT_DATE: Regex = Regex::new(r"(\d{1,2})\.(\d{1,2})(?:\.(\d{4}))?").unwrap();
    static ref SLASH_DATE: Regex = Regex::new(r"(\d{1,2})/(\d{1,2})(?:/(\d{4}))?").unwrap();
    static ref REPLY_RECIPIENT: Regex = Regex::new(r"(?i)odgovori (?:za|na)?\s+(.+)$").unwrap();
    static ref NOUN_RECIPIENT: Regex =
        Regex::new(r"(?i)(?:poruka|odgovor|mail) (?:za|od)\s+(.+)$").unwrap();
    // A trailing "na ..." clause ends a recipient capture.
    static ref RECIPIENT_CLAUSE: Regex = Regex::new(r"\s+na").unwrap();
    static ref QUOTED_CONTENT: Regex = Regex::new("\"([^\"]*)\"").unwrap();
    static ref AFTER_NA_PORUKU: Regex = Regex::new(r"(?i)na poruku[:\s]+(.+)$").unwrap();
    static ref AFTER_ODGOVORI_NA: Regex = Regex::new(r"(?i)odgovori na[:\s]+(.+)$").unwrap();
    // A trailing "od ..." or "kome ..." clause ends a content capture.
    static ref CONTENT_CLAUSE: Regex = Regex::new(r"\s+od|\s+kome").unwrap();
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Cuts a capture short at the first trailing clause marker, mirroring the
/// lookahead the patterns imply.
fn before_clause<'a>(capture: &'a str, clause: &Regex) -> &'a str {
    clause
        .find(capture)
        .map_or(capture, |m| &capture[..m.start()])
}

/// Pulls a concrete date out of free text, trying relative-day tokens, then
/// weekday names, then numeric `D.M[.YYYY]` / `D/M[/YYYY]` patterns. A
/// numeric match that is not a valid calendar date is discarded and the next
/// pattern gets its turn. Returns `None` when nothing matches; the caller
/// decides the default.
pub fn extract_date(lexicon: &Lexicon, text: &str, today: Date) -> Option<Date> {
    let lowered = text.to_lowercase();

    for relative in &lexicon.relative_days {
        if lowered.contains(relative.token.as_str()) {
            return Some(today + Duration::days(relative.offset));
        }
    }

    for weekday in &lexicon.weekdays {
        if lowered.contains(weekday.name.as_str()) {
            let current = i64::from(today.weekday().number_days_from_monday());
            let mut ahead = i64::from(weekday.index) - current;
            // A weekday that already passed this week means the next one.
            if ahead <= 0 {
                ahead += 7;
            }
            return Some(today + Duration::days(ahead));
        }
    }

    for pattern in [&*DOT_DATE, &*SLASH_DATE] {
        let Some(caps) = pattern.captures(&lowered) else {
            continue;
        };
        let day = caps[1].parse::<u8>().unwrap_or(0);
        let month = caps[2].parse::<u8>().unwrap_or(0);
        let year = caps
            .get(3)
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .unwrap_or_else(|| today.year());
        if let Some(date) = build_date(year, month, day) {
            return Some(date);
        }
    }

    None
}

fn build_date(year: i32, month: u8, day: u8) -> Option<Date> {
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// First canonical meal-type label whose spelling variants match, in table
/// order.
pub fn extract_meal_type(lexicon: &Lexicon, text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    lexicon
        .meal_types
        .iter()
        .find(|entry| entry.variants.iter().any(|v| lowered.contains(v.as_str())))
        .map(|entry| entry.label.clone())
}

/// Name of the person a reply is for, from phrasings like "odgovori za
/// Marka" or "poruka za Janu". Matched against the original text so the
/// captured name keeps its casing.
pub fn extract_recipient(text: &str) -> Option<String> {
    for pattern in [&*REPLY_RECIPIENT, &*NOUN_RECIPIENT] {
        if let Some(caps) = pattern.captures(text) {
            return non_empty(before_clause(&caps[1], &RECIPIENT_CLAUSE));
        }
    }
    None
}

/// The message being replied to: a quoted span, or the tail of a "na
/// poruku:" / "odgovori na:" phrase up to a trailing "od"/"kome" clause.
pub fn extract_message_content(text: &str) -> Option<String> {
    if let Some(caps) = QUOTED_CONTENT.captures(text) {
        return non_empty(&caps[1]);
    }
    for pattern in [&*AFTER_NA_PORUKU, &*AFTER_ODGOVORI_NA] {
        if let Some(caps) = pattern.captures(text) {
            return non_empty(before_clause(&caps[1], &CONTENT_CLAUSE));
        }
    }
    None
}
