//! Resolution of extracted tokens into a concrete naive date/time.
//!
//! [`parse`] is the entry point: it runs the lexical recognizers in their
//! fixed order, then resolves the date signal (strict precedence: ISO >
//! month/day > relative keyword > weekday expression > today) and the clock
//! token (12-hour wraparound rules) against an injected reference date.
//! No system clock is read here — the caller provides "today", keeping the
//! whole path deterministic under test.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{Result, SwapError};
use crate::extract::{self, ClockToken, DateSignal, Meridiem, Qualifier};
use crate::zone::CivilZone;

/// A successfully parsed input: the naive wall-clock stamp plus the zone
/// hint captured from an explicit marker, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub naive: NaiveDateTime,
    pub hint: Option<CivilZone>,
}

/// Parse a free-form date/time expression against a reference date.
///
/// # Errors
///
/// Returns [`SwapError::EmptyInput`] for blank input and
/// [`SwapError::UnparseableInput`] when no clock-time token is found (a
/// bare date is not a valid input) or when the clock values do not form a
/// real wall-clock time. Malformed date sub-tokens are never surfaced;
/// they fall through to the next strategy in precedence.
pub fn parse(input: &str, today: NaiveDate) -> Result<Parsed> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SwapError::EmptyInput);
    }

    let (hint, text) = extract::take_zone_hint(text);
    let (signal, text) = extract::take_date_signal(&text, today.year());
    let (clock, _) = extract::take_clock(&text);
    let Some(clock) = clock else {
        return Err(SwapError::UnparseableInput(input.trim().to_string()));
    };

    let date = resolve_date(signal, today);
    let (hour, minute) = to_hour24(clock);
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| SwapError::UnparseableInput(input.trim().to_string()))?;

    Ok(Parsed {
        naive: date.and_time(time),
        hint,
    })
}

/// Apply whichever date strategy fired; no signal means the reference date.
fn resolve_date(signal: Option<DateSignal>, today: NaiveDate) -> NaiveDate {
    match signal {
        Some(DateSignal::Absolute(date)) => date,
        Some(DateSignal::RelativeDays(days)) => today + Duration::days(days),
        Some(DateSignal::Weekday { target, qualifier }) => next_weekday(today, target, qualifier),
        None => today,
    }
}

/// The date of the requested weekday relative to `reference`.
///
/// `next` means strictly the following week's occurrence (a zero offset
/// becomes 7); absent or `this` means the nearest occurrence including
/// today (a zero offset stays 0).
fn next_weekday(reference: NaiveDate, target: Weekday, qualifier: Option<Qualifier>) -> NaiveDate {
    let days_ahead = (target.num_days_from_monday() as i64
        - reference.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    let days_ahead = if qualifier == Some(Qualifier::Next) && days_ahead == 0 {
        7
    } else {
        days_ahead
    };
    reference + Duration::days(days_ahead)
}

/// Normalize a clock token to a 24-hour (hour, minute) pair.
///
/// Minute defaults to 0. `pm` with hour 1-11 adds 12; `am` with hour 12
/// becomes 0; everything else passes through, so bare 24-hour hours are
/// used as-is.
fn to_hour24(clock: ClockToken) -> (u32, u32) {
    let minute = clock.minute.unwrap_or(0);
    let hour = match clock.meridiem {
        Some(Meridiem::Pm) if (1..=11).contains(&clock.hour) => clock.hour + 12,
        Some(Meridiem::Am) if clock.hour == 12 => 0,
        _ => clock.hour,
    };
    (hour, minute)
}
