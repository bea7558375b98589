//! # tzswap-core
//!
//! Natural-language date/time recognition and civil-time conversion
//! between US Eastern time and Australian Western Standard Time.
//!
//! Free-form expressions like `"3:30 PM"`, `"2026-02-03 8:00 AM Perth"`,
//! `"Mar 4 3:30pm"`, `"tomorrow 9am"` or `"next tuesday 3pm"` are parsed
//! into a concrete wall-clock stamp, attributed to one of the two zones
//! (explicit marker > host zone > Eastern default), converted across the
//! DST boundary with the real transition rules, and rendered back as a
//! short annotation:
//!
//! ```
//! use chrono::NaiveDate;
//! use tzswap_core::swap;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
//! let out = swap("thursday 1pm", today, Some("America/New_York")).unwrap();
//! assert_eq!(out.annotated, "thursday 1pm (2:00am Fri Feb 13 AWST)");
//! ```
//!
//! Everything is pure: the reference date and the host zone identifier are
//! arguments, never ambient reads, so every path is deterministic under
//! test.
//!
//! ## Modules
//!
//! - `extract` — ordered match-and-strip token recognizers (internal)
//! - [`resolve`] — date/time resolution into a naive stamp
//! - [`zone`] — the two supported zones and source disambiguation
//! - [`convert`] — instant-preserving cross-zone conversion
//! - [`render`] — fixed short format and annotation assembly
//! - [`swap`] — the end-to-end pipeline
//! - [`error`] — error types

pub mod convert;
pub mod error;
mod extract;
pub mod render;
pub mod resolve;
pub mod swap;
pub mod zone;

pub use convert::{convert, Conversion};
pub use error::SwapError;
pub use render::{annotate, short_format};
pub use resolve::{parse, Parsed};
pub use swap::{swap, Swapped};
pub use zone::{choose_zones, CivilZone};
