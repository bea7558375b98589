//! The end-to-end pipeline: text in, annotated text out.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::convert::convert;
use crate::error::Result;
use crate::render::{annotate, short_format};
use crate::resolve::parse;
use crate::zone::choose_zones;

/// The result of a successful swap.
///
/// All stamps are strings so the record serializes cleanly; `annotated` is
/// the line intended for the text sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swapped {
    /// `"<input, trimmed> (<converted>)"`.
    pub annotated: String,
    /// The rendered short form alone, e.g. `"2:00am Fri Feb 13 AWST"`.
    pub converted: String,
    /// Short label of the zone the input was attributed to.
    pub source_zone: &'static str,
    /// Short label of the zone the output is expressed in.
    pub target_zone: &'static str,
    /// The input stamp in the source zone (RFC 3339 with offset).
    pub source_local: String,
    /// The converted stamp in the target zone (RFC 3339 with offset).
    pub target_local: String,
}

/// Convert an informal date/time expression into the counterpart zone and
/// annotate the input with the result.
///
/// `today` anchors relative and weekday expressions; `host_zone` is the
/// host's configured civil timezone identifier, consulted only when the
/// input carries no explicit zone marker. Both are plain arguments — this
/// function reads no clocks and no environment.
///
/// # Errors
///
/// Propagates the parse failures of [`parse`](crate::resolve::parse) and
/// the zone-data failure of [`convert`](crate::convert::convert); see
/// [`SwapError`](crate::error::SwapError) for the taxonomy.
pub fn swap(input: &str, today: NaiveDate, host_zone: Option<&str>) -> Result<Swapped> {
    let parsed = parse(input, today)?;
    let (source, target) = choose_zones(parsed.hint, host_zone);
    let out = convert(parsed.naive, source, target)?;
    let converted = short_format(&out.target_local, target.label());
    debug!(naive = %parsed.naive, ?source, ?target, %converted, "swap");
    Ok(Swapped {
        annotated: annotate(input, &converted),
        converted,
        source_zone: source.label(),
        target_zone: target.label(),
        source_local: out.source_local.to_rfc3339(),
        target_local: out.target_local.to_rfc3339(),
    })
}
