//! The two supported civil timezones and source-zone disambiguation.
//!
//! Exactly two zones exist: US Eastern time (America/New_York, short label
//! "ET") and Australian Western Standard Time (Australia/Perth, "AWST").
//! They are fixed constants, not user-extensible; the target of a
//! conversion is always the counterpart of the source.

use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::error::SwapError;

/// One of the two supported civil timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CivilZone {
    /// America/New_York — EST in winter, EDT in summer.
    Eastern,
    /// Australia/Perth — AWST year-round (no DST since the 2006–2009 trial).
    Perth,
}

/// Textual markers that tag an input as Eastern time.
/// Checked before [`PERTH_MARKERS`]; at most one family ever fires.
pub const EASTERN_MARKERS: &[&str] = &["Eastern", "ET", "EST", "EDT", "America/New_York"];

/// Textual markers that tag an input as Perth time.
pub const PERTH_MARKERS: &[&str] = &["AWST", "Perth", "Australia/Perth"];

/// Host timezone identifiers recognized as Eastern. Exact matches only;
/// identifiers outside both tables fall to the Eastern default.
const EASTERN_HOST_IDS: &[&str] = &["America/New_York", "US/Eastern", "EST5EDT"];

/// Host timezone identifiers recognized as Perth.
const PERTH_HOST_IDS: &[&str] = &["Australia/Perth", "Australia/West"];

impl CivilZone {
    /// The canonical short label rendered in output ("ET" or "AWST").
    pub const fn label(self) -> &'static str {
        match self {
            CivilZone::Eastern => "ET",
            CivilZone::Perth => "AWST",
        }
    }

    /// The IANA name under which this zone's transition rules are filed.
    pub const fn iana(self) -> &'static str {
        match self {
            CivilZone::Eastern => "America/New_York",
            CivilZone::Perth => "Australia/Perth",
        }
    }

    /// The other supported zone.
    pub const fn counterpart(self) -> CivilZone {
        match self {
            CivilZone::Eastern => CivilZone::Perth,
            CivilZone::Perth => CivilZone::Eastern,
        }
    }

    /// Look up this zone's transition rules in the embedded tzdb.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ZoneDataUnavailable`] if the compiled database
    /// has no entry under this zone's IANA name (a trimmed or stale
    /// chrono-tz build).
    pub fn rules(self) -> Result<Tz, SwapError> {
        self.iana()
            .parse::<Tz>()
            .map_err(|_| SwapError::ZoneDataUnavailable(self.iana()))
    }

    /// Map a host timezone identifier to a supported zone, if recognized.
    pub fn from_host_identifier(id: &str) -> Option<CivilZone> {
        if EASTERN_HOST_IDS.contains(&id) {
            Some(CivilZone::Eastern)
        } else if PERTH_HOST_IDS.contains(&id) {
            Some(CivilZone::Perth)
        } else {
            None
        }
    }
}

/// Decide the (source, target) zone pair for a parsed input.
///
/// An explicit marker hint wins outright. Otherwise the host identifier is
/// consulted against the enumerated tables, and anything unrecognized (or
/// no identifier at all) defaults to Eastern. Total: always returns a pair.
pub fn choose_zones(hint: Option<CivilZone>, host_identifier: Option<&str>) -> (CivilZone, CivilZone) {
    let source = hint
        .or_else(|| host_identifier.and_then(CivilZone::from_host_identifier))
        .unwrap_or(CivilZone::Eastern);
    debug!(?hint, host_identifier, ?source, "resolved source zone");
    (source, source.counterpart())
}
