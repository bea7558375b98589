//! Error types for tzswap operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The input string was absent or whitespace-only.
    #[error("Empty input")]
    EmptyInput,

    /// No clock-time token was found after every extraction strategy ran.
    /// A bare date with no time is not a valid input.
    #[error("Unparseable input: {0}")]
    UnparseableInput(String),

    /// The embedded timezone rule database has no entry for a supported
    /// zone. Input quality is not at fault; the build environment is.
    #[error("Time zone data unavailable for {0}")]
    ZoneDataUnavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, SwapError>;
