//! Parsing the coordinate-list input format.

use crate::{
    error::Error,
    universe::{Coord, Universe},
};
use std::{io::BufRead, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An initial pattern: the grid dimensions plus the cells to bring alive.
///
/// The text format is one header line, `rows cols`, followed by zero or
/// more lines each holding a `row col` pair marking a live cell. Tokens
/// are whitespace-separated and blank lines are skipped.
///
/// Parsing does not check the pairs against the dimensions; that is the
/// contract of [`Universe::populate`], so a pattern with out-of-range
/// cells parses fine and fails when a universe is built from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    /// Number of rows in the universe.
    pub rows: u32,

    /// Number of columns in the universe.
    pub cols: u32,

    /// The cells to bring alive.
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Reads a pattern from the text format.
    ///
    /// A missing or non-numeric header is an error, never an empty
    /// universe.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(Error::BadHeader(String::new())),
            }
        };
        let (rows, cols) = parse_pair(&header).ok_or_else(|| Error::BadHeader(header.clone()))?;

        let mut cells = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let pair = parse_pair(&line).ok_or_else(|| Error::BadEntry(i + 1, line.clone()))?;
            cells.push(pair);
        }

        Ok(Self { rows, cols, cells })
    }

    /// Creates a universe of the pattern's dimensions and populates it.
    pub fn universe(&self, toroidal: bool) -> Result<Universe, Error> {
        let mut universe = Universe::new(self.rows, self.cols, toroidal)?;
        universe.populate(self.cells.iter().copied())?;
        Ok(universe)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

/// Parses two whitespace-separated `u32`s, rejecting trailing tokens.
fn parse_pair(line: &str) -> Option<(u32, u32)> {
    let mut tokens = line.split_whitespace();
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((a, b))
}
