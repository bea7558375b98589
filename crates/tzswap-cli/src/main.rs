//! `tzswap` — annotate an informal time expression with its ET/AWST
//! counterpart.
//!
//! The expression comes from the argument list (joined) or, when no
//! arguments are given, from standard input. Exactly one line goes to
//! standard output: the annotated input on success, or a fixed advisory
//! when the input is empty, unparseable, or zone data is missing. Bad
//! input never makes the process exit nonzero; the advisory *is* the
//! output.

use std::io::Read;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tzswap_core::{swap, SwapError};

#[derive(Parser)]
#[command(name = "tzswap", version, about = "Convert informal times between ET and AWST")]
struct Args {
    /// Expression to convert, e.g. "next tuesday 3pm" or "8:00 AM Perth";
    /// read from standard input when omitted.
    text: Vec<String>,

    /// Emit the full conversion record as JSON instead of the annotated line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let raw = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading standard input")?;
        buf
    } else {
        args.text.join(" ")
    };

    let today = Local::now().date_naive();
    let host_zone = std::env::var("TZ").ok();

    let line = match swap(&raw, today, host_zone.as_deref()) {
        Ok(out) if args.json => serde_json::to_string(&out).context("serializing result")?,
        Ok(out) => out.annotated,
        Err(err) => advisory(&err),
    };
    println!("{line}");
    Ok(())
}

/// The fixed user-visible advisory for each failure kind.
fn advisory(err: &SwapError) -> String {
    match err {
        SwapError::EmptyInput => "[tz] empty input (copy a time first)".to_string(),
        SwapError::UnparseableInput(_) => {
            "[tz] could not parse (try 'next tuesday 3pm', '3:30 PM', or include 'ET'/'Perth')"
                .to_string()
        }
        SwapError::ZoneDataUnavailable(zone) => {
            format!("[tz] time zone database unavailable for {zone} (update chrono-tz)")
        }
    }
}
