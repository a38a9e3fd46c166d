//! All kinds of errors in this crate.

use crate::universe::Coord;
use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Cell at {0:?} is outside the universe.
    OutOfBounds(Coord),
    /// Rows / columns should be positive.
    NonPositiveError,
    /// Malformed header line: {0:?}.
    BadHeader(String),
    /// Malformed coordinate pair on line {0}: {1:?}.
    BadEntry(usize, String),
    /// I/O error: {0}.
    Io(#[from] io::Error),
}
