//! Lexical extraction of date, time, and zone tokens from free-form text.
//!
//! Each recognizer is a pure function taking the working text and returning
//! `(Option<match>, remaining text)`. On a hit the matched substring is
//! removed and surrounding whitespace collapsed, so later recognizers see a
//! clean remainder; on a miss the text passes through untouched. The
//! recognizers are order-significant and composed left-to-right by
//! [`crate::resolve::parse`]:
//!
//! 1. zone marker (Eastern family first, then Perth)
//! 2. ISO calendar date (`YYYY-MM-DD`)
//! 3. month-name + day (`Mar 4`, `sept. 12`)
//! 4. relative-day keyword (`today`/`tomorrow`/`yesterday`)
//! 5. weekday expression (`next tuesday`, `this fri`, `monday`)
//! 6. clock time (`3:30 PM`, `15:30`, `3pm`)
//!
//! Only one of the date recognizers (2–5) ever fires per input.

use chrono::{NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::zone::{CivilZone, EASTERN_MARKERS, PERTH_MARKERS};

static EASTERN_RE: Lazy<Regex> = Lazy::new(|| marker_regex(EASTERN_MARKERS));
static PERTH_RE: Lazy<Regex> = Lazy::new(|| marker_regex(PERTH_MARKERS));

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("ISO date pattern compiles"));

static MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]{3,9})\.?\s*(\d{1,2})").expect("month-day pattern compiles"));

static RELATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(today|tomorrow|yesterday)\b").expect("relative-day pattern compiles")
});

static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(this|next)\s+)?(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b",
    )
    .expect("weekday pattern compiles")
});

static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})(?::(\d{2}))?\s*(am|pm)?").expect("clock pattern compiles"));

fn marker_regex(markers: &[&str]) -> Regex {
    let alternation = markers.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("marker alternation compiles")
}

/// Qualifier on a weekday expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Qualifier {
    /// Nearest occurrence including today.
    This,
    /// Strictly the following week's occurrence; never today.
    Next,
}

/// The date strategy that fired for an input, pre-resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateSignal {
    /// An explicit calendar date (ISO token or month-name + day).
    Absolute(NaiveDate),
    /// Offset in days from the reference date.
    RelativeDays(i64),
    /// A weekday expression, resolved later against the reference date.
    Weekday {
        target: Weekday,
        qualifier: Option<Qualifier>,
    },
}

/// Meridiem marker on a clock token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

/// A raw clock token before 24-hour normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClockToken {
    pub hour: u32,
    pub minute: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

/// Remove `start..end` from `text` and collapse runs of whitespace.
fn strip_span(text: &str, start: usize, end: usize) -> String {
    let joined = format!("{} {}", &text[..start], &text[end..]);
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Recognize an explicit zone marker. The Eastern family is checked first;
/// the Perth family is consulted only when no Eastern marker is present, so
/// at most one hint is ever produced. The first occurrence is stripped.
pub(crate) fn take_zone_hint(text: &str) -> (Option<CivilZone>, String) {
    for (re, zone) in [(&EASTERN_RE, CivilZone::Eastern), (&PERTH_RE, CivilZone::Perth)] {
        if let Some(m) = re.find(text) {
            debug!(marker = m.as_str(), ?zone, "zone marker");
            return (Some(zone), strip_span(text, m.start(), m.end()));
        }
    }
    (None, text.to_string())
}

/// Recognize a strict `YYYY-MM-DD` token. A lexical match whose fields do
/// not form a real calendar date leaves the text untouched so the next
/// date strategy can run.
pub(crate) fn take_iso_date(text: &str) -> (Option<NaiveDate>, String) {
    let Some(caps) = ISO_DATE_RE.captures(text) else {
        return (None, text.to_string());
    };
    let (Ok(year), Ok(month), Ok(day)) = (
        caps[1].parse::<i32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<u32>(),
    ) else {
        return (None, text.to_string());
    };
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => {
            let m = caps.get(0).expect("capture 0 is the whole match");
            (Some(date), strip_span(text, m.start(), m.end()))
        }
        None => (None, text.to_string()),
    }
}

/// Recognize a month-name + day token (`Mar 4`, `sept. 12`). The month is
/// resolved from its first three letters; the year comes from the caller.
/// An invalid month name or impossible day falls through unstripped.
pub(crate) fn take_month_day(text: &str, year: i32) -> (Option<NaiveDate>, String) {
    let Some(caps) = MONTH_DAY_RE.captures(text) else {
        return (None, text.to_string());
    };
    let date = match (month_from_name(&caps[1]), caps[2].parse::<u32>()) {
        (Some(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };
    match date {
        Some(date) => {
            let m = caps.get(0).expect("capture 0 is the whole match");
            (Some(date), strip_span(text, m.start(), m.end()))
        }
        None => (None, text.to_string()),
    }
}

/// Recognize `today`/`tomorrow`/`yesterday` as a day offset of 0/+1/-1.
pub(crate) fn take_relative_day(text: &str) -> (Option<i64>, String) {
    let Some(caps) = RELATIVE_RE.captures(text) else {
        return (None, text.to_string());
    };
    let offset = match caps[1].to_lowercase().as_str() {
        "today" => 0,
        "tomorrow" => 1,
        _ => -1,
    };
    let m = caps.get(0).expect("capture 0 is the whole match");
    (Some(offset), strip_span(text, m.start(), m.end()))
}

/// Recognize a weekday expression with an optional `this`/`next` qualifier.
pub(crate) fn take_weekday(text: &str) -> (Option<(Weekday, Option<Qualifier>)>, String) {
    let Some(caps) = WEEKDAY_RE.captures(text) else {
        return (None, text.to_string());
    };
    let qualifier = caps.get(1).map(|m| match m.as_str().to_lowercase().as_str() {
        "next" => Qualifier::Next,
        _ => Qualifier::This,
    });
    let Some(target) = weekday_from_name(&caps[2]) else {
        return (None, text.to_string());
    };
    let m = caps.get(0).expect("capture 0 is the whole match");
    (Some((target, qualifier)), strip_span(text, m.start(), m.end()))
}

/// Pick the date strategies in their fixed precedence order, stopping at
/// the first that fires.
pub(crate) fn take_date_signal(text: &str, year: i32) -> (Option<DateSignal>, String) {
    let (iso, rest) = take_iso_date(text);
    if let Some(date) = iso {
        debug!(%date, "date from ISO token");
        return (Some(DateSignal::Absolute(date)), rest);
    }
    let (month_day, rest) = take_month_day(text, year);
    if let Some(date) = month_day {
        debug!(%date, "date from month-day token");
        return (Some(DateSignal::Absolute(date)), rest);
    }
    let (relative, rest) = take_relative_day(text);
    if let Some(days) = relative {
        debug!(days, "date from relative keyword");
        return (Some(DateSignal::RelativeDays(days)), rest);
    }
    let (weekday, rest) = take_weekday(text);
    if let Some((target, qualifier)) = weekday {
        debug!(?target, ?qualifier, "date from weekday expression");
        return (Some(DateSignal::Weekday { target, qualifier }), rest);
    }
    (None, text.to_string())
}

/// Recognize a clock token anywhere in the remaining text: 1-2 digit hour,
/// optional `:MM`, optional am/pm.
pub(crate) fn take_clock(text: &str) -> (Option<ClockToken>, String) {
    let Some(caps) = CLOCK_RE.captures(text) else {
        return (None, text.to_string());
    };
    let Ok(hour) = caps[1].parse::<u32>() else {
        return (None, text.to_string());
    };
    let minute = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
    let meridiem = caps.get(3).map(|m| {
        if m.as_str().eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });
    let token = ClockToken { hour, minute, meridiem };
    debug!(?token, "clock token");
    let m = caps.get(0).expect("capture 0 is the whole match");
    (Some(token), strip_span(text, m.start(), m.end()))
}

/// Month number from the first three letters of an English month name.
fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Weekday from a full English name or standard abbreviation.
fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tues" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thurs" | "thur" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── zone markers ────────────────────────────────────────────────────

    #[test]
    fn eastern_marker_strips_and_hints() {
        let (hint, rest) = take_zone_hint("3pm ET tomorrow");
        assert_eq!(hint, Some(CivilZone::Eastern));
        assert_eq!(rest, "3pm tomorrow");
    }

    #[test]
    fn perth_marker_case_insensitive() {
        let (hint, rest) = take_zone_hint("8:00 AM perth");
        assert_eq!(hint, Some(CivilZone::Perth));
        assert_eq!(rest, "8:00 AM");
    }

    #[test]
    fn eastern_family_wins_over_perth() {
        let (hint, _) = take_zone_hint("EST or Perth?");
        assert_eq!(hint, Some(CivilZone::Eastern));
    }

    #[test]
    fn full_iana_name_is_a_marker() {
        let (hint, _) = take_zone_hint("9am America/New_York");
        assert_eq!(hint, Some(CivilZone::Eastern));
    }

    #[test]
    fn no_marker_passes_text_through() {
        let (hint, rest) = take_zone_hint("3:30 PM");
        assert_eq!(hint, None);
        assert_eq!(rest, "3:30 PM");
    }

    #[test]
    fn marker_must_be_whole_word() {
        // "let" contains "et" but is not a marker
        let (hint, _) = take_zone_hint("let us meet at 3pm");
        assert_eq!(hint, None);
    }

    // ── date recognizers ────────────────────────────────────────────────

    #[test]
    fn iso_date_strips() {
        let (date, rest) = take_iso_date("2026-02-03 8:00 AM");
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()));
        assert_eq!(rest, "8:00 AM");
    }

    #[test]
    fn invalid_iso_date_falls_through_unstripped() {
        let (date, rest) = take_iso_date("2026-13-99 5pm");
        assert_eq!(date, None);
        assert_eq!(rest, "2026-13-99 5pm");
    }

    #[test]
    fn month_day_with_period() {
        let (date, rest) = take_month_day("sept. 12 9am", 2026);
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()));
        assert_eq!(rest, "9am");
    }

    #[test]
    fn month_day_full_name() {
        let (date, _) = take_month_day("March 4 3:30pm", 2026);
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()));
    }

    #[test]
    fn invalid_month_name_falls_through_unstripped() {
        let (date, rest) = take_month_day("tomorrow 9am", 2026);
        assert_eq!(date, None);
        assert_eq!(rest, "tomorrow 9am");
    }

    #[test]
    fn impossible_day_falls_through_unstripped() {
        let (date, rest) = take_month_day("Feb 30 9am", 2026);
        assert_eq!(date, None);
        assert_eq!(rest, "Feb 30 9am");
    }

    #[test]
    fn relative_keywords_map_to_offsets() {
        assert_eq!(take_relative_day("today 9am").0, Some(0));
        assert_eq!(take_relative_day("Tomorrow 9am").0, Some(1));
        assert_eq!(take_relative_day("yesterday 9am").0, Some(-1));
    }

    #[test]
    fn weekday_with_next_qualifier() {
        let (wd, rest) = take_weekday("next tuesday 3pm");
        assert_eq!(wd, Some((Weekday::Tue, Some(Qualifier::Next))));
        assert_eq!(rest, "3pm");
    }

    #[test]
    fn weekday_abbreviation_with_this() {
        let (wd, _) = take_weekday("this fri 10:30");
        assert_eq!(wd, Some((Weekday::Fri, Some(Qualifier::This))));
    }

    #[test]
    fn bare_weekday_has_no_qualifier() {
        let (wd, _) = take_weekday("thursday 1pm");
        assert_eq!(wd, Some((Weekday::Thu, None)));
    }

    #[test]
    fn date_signal_precedence_iso_over_weekday() {
        let (signal, _) = take_date_signal("monday 2026-02-03 9am", 2026);
        assert_eq!(
            signal,
            Some(DateSignal::Absolute(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()))
        );
    }

    #[test]
    fn date_signal_weekday_after_month_day_miss() {
        // "fri 10" matches the month-day shape but "fri" is not a month
        let (signal, rest) = take_date_signal("this fri 10:30", 2026);
        assert_eq!(
            signal,
            Some(DateSignal::Weekday {
                target: Weekday::Fri,
                qualifier: Some(Qualifier::This),
            })
        );
        assert_eq!(rest, "10:30");
    }

    // ── clock tokens ────────────────────────────────────────────────────

    #[test]
    fn clock_hour_minute_meridiem() {
        let (clock, _) = take_clock("3:30 PM");
        assert_eq!(
            clock,
            Some(ClockToken {
                hour: 3,
                minute: Some(30),
                meridiem: Some(Meridiem::Pm),
            })
        );
    }

    #[test]
    fn clock_twenty_four_hour() {
        let (clock, _) = take_clock("15:30");
        assert_eq!(
            clock,
            Some(ClockToken {
                hour: 15,
                minute: Some(30),
                meridiem: None,
            })
        );
    }

    #[test]
    fn clock_bare_hour_with_meridiem() {
        let (clock, _) = take_clock("3pm");
        assert_eq!(
            clock,
            Some(ClockToken {
                hour: 3,
                minute: None,
                meridiem: Some(Meridiem::Pm),
            })
        );
    }

    #[test]
    fn clock_spaced_meridiem() {
        let (clock, _) = take_clock("3 PM");
        assert_eq!(clock.unwrap().meridiem, Some(Meridiem::Pm));
    }

    #[test]
    fn no_clock_in_plain_words() {
        let (clock, _) = take_clock("hello world");
        assert_eq!(clock, None);
    }
}
