//! Instant-preserving conversion between the two civil timezones.
//!
//! A naive wall-clock stamp is attached to the source zone's transition
//! rules, then re-expressed in the target zone. Conversions on DST
//! transition dates follow the zone's actual rule for that date, not a
//! fixed offset: the rules come from the tzdb embedded in chrono-tz.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, SwapError};
use crate::zone::CivilZone;

/// The outcome of a conversion: the same instant expressed in both zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source_zone: CivilZone,
    pub target_zone: CivilZone,
    pub source_local: DateTime<Tz>,
    pub target_local: DateTime<Tz>,
}

/// Attach `source`'s rules to a naive stamp and convert into `target`.
///
/// Local-time resolution at DST transitions: an ambiguous wall time (the
/// repeated fall-back hour) takes the earlier offset; a nonexistent wall
/// time (the spring-forward gap) rolls forward one hour to the first valid
/// reading.
///
/// # Errors
///
/// Returns [`SwapError::ZoneDataUnavailable`] if either zone's rules are
/// missing from the embedded database.
pub fn convert(naive: NaiveDateTime, source: CivilZone, target: CivilZone) -> Result<Conversion> {
    let source_rules = source.rules()?;
    let target_rules = target.rules()?;
    let source_local = attach(naive, source_rules, source)?;
    let target_local = source_local.with_timezone(&target_rules);
    Ok(Conversion {
        source_zone: source,
        target_zone: target,
        source_local,
        target_local,
    })
}

/// Resolve a naive stamp to a concrete instant under `rules`.
fn attach(naive: NaiveDateTime, rules: Tz, zone: CivilZone) -> Result<DateTime<Tz>> {
    match rules.from_local_datetime(&naive) {
        LocalResult::Single(stamp) => Ok(stamp),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        LocalResult::None => rules
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or(SwapError::ZoneDataUnavailable(zone.iana())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use proptest::prelude::*;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn winter_eastern_to_perth() {
        // Feb 12 is EST (UTC-5); Perth is UTC+8, 13 hours ahead
        let c = convert(naive(2026, 2, 12, 15, 30), CivilZone::Eastern, CivilZone::Perth).unwrap();
        assert_eq!(c.target_local.naive_local(), naive(2026, 2, 13, 4, 30));
    }

    #[test]
    fn summer_eastern_to_perth_uses_edt() {
        // Jul 1 is EDT (UTC-4); Perth is 12 hours ahead
        let c = convert(naive(2026, 7, 1, 9, 0), CivilZone::Eastern, CivilZone::Perth).unwrap();
        assert_eq!(c.target_local.naive_local(), naive(2026, 7, 1, 21, 0));
    }

    #[test]
    fn perth_to_eastern_crosses_backward() {
        // 8:00 AWST Feb 3 = 00:00 UTC = 19:00 EST Feb 2
        let c = convert(naive(2026, 2, 3, 8, 0), CivilZone::Perth, CivilZone::Eastern).unwrap();
        assert_eq!(c.target_local.naive_local(), naive(2026, 2, 2, 19, 0));
    }

    #[test]
    fn spring_forward_gap_rolls_ahead() {
        // 2026-03-08 02:30 does not exist in Eastern; reads as 03:30 EDT
        let c = convert(naive(2026, 3, 8, 2, 30), CivilZone::Eastern, CivilZone::Perth).unwrap();
        assert_eq!(c.source_local.naive_local(), naive(2026, 3, 8, 3, 30));
        // 03:30 EDT = 07:30 UTC = 15:30 AWST
        assert_eq!(c.target_local.naive_local(), naive(2026, 3, 8, 15, 30));
    }

    #[test]
    fn fall_back_ambiguity_takes_earlier_offset() {
        // 2026-11-01 01:30 occurs twice in Eastern; the EDT reading wins
        let c = convert(naive(2026, 11, 1, 1, 30), CivilZone::Eastern, CivilZone::Perth).unwrap();
        // 01:30 EDT = 05:30 UTC = 13:30 AWST
        assert_eq!(c.target_local.naive_local(), naive(2026, 11, 1, 13, 30));
    }

    #[test]
    fn day_after_fall_back_is_est_again() {
        // Nov 2 is EST (UTC-5); Perth 13 hours ahead
        let c = convert(naive(2026, 11, 2, 12, 0), CivilZone::Eastern, CivilZone::Perth).unwrap();
        assert_eq!(c.target_local.naive_local(), naive(2026, 11, 3, 1, 0));
    }

    #[test]
    fn round_trip_reproduces_wall_clock() {
        let out = convert(naive(2026, 2, 3, 8, 0), CivilZone::Perth, CivilZone::Eastern).unwrap();
        let back = convert(
            out.target_local.naive_local(),
            CivilZone::Eastern,
            CivilZone::Perth,
        )
        .unwrap();
        assert_eq!(back.target_local.naive_local(), naive(2026, 2, 3, 8, 0));
    }

    proptest! {
        /// Re-expressing the converted stamp back in the source zone
        /// reproduces the original wall-clock date/time exactly, for any
        /// stamp in either direction — including DST transition days.
        #[test]
        fn round_trip_reproduces_the_source_wall_clock(
            day_offset in 0i64..730,
            minutes in 0u32..(24 * 60),
            eastern_first in proptest::bool::ANY,
        ) {
            let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(day_offset);
            let stamp = base.and_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
            let (src, tgt) = if eastern_first {
                (CivilZone::Eastern, CivilZone::Perth)
            } else {
                (CivilZone::Perth, CivilZone::Eastern)
            };

            let out = convert(stamp, src, tgt).unwrap();
            let back = out.target_local.with_timezone(&src.rules().unwrap());
            prop_assert_eq!(back, out.source_local);
            prop_assert_eq!(back.naive_local(), out.source_local.naive_local());
            prop_assert_eq!(back.second(), 0);
        }
    }
}
