//! Fixed short-format rendering and final annotation assembly.

use chrono::DateTime;
use chrono_tz::Tz;

/// Format a converted stamp as `"<h>:<mm><am|pm> <Wkd> <Mon> <d> <LABEL>"`,
/// e.g. `"2:00am Fri Feb 13 AWST"`. Hour and day carry no leading zero;
/// the meridiem is lowercase.
pub fn short_format(stamp: &DateTime<Tz>, label: &str) -> String {
    format!("{} {}", stamp.format("%-I:%M%P %a %b %-d"), label)
}

/// Assemble the final output line: the trimmed input with the rendered
/// conversion appended in parentheses.
pub fn annotate(input: &str, rendered: &str) -> String {
    format!("{} ({})", input.trim(), rendered)
}
