//! The universe: a fixed-size grid of cells.

use crate::error::Error;
use std::fmt::{self, Display, Formatter, Write};

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
pub type Coord = (u32, u32);

/// The eight neighbor offsets, in reading order.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size universe of live and dead cells.
///
/// The grid is stored row-major in a flat vector; the dimensions and the
/// topology flag are fixed at creation. On a bounded universe, positions
/// outside the grid are permanently dead; on a toroidal one, the edges
/// wrap to the opposite side for neighbor counting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    /// Number of rows.
    rows: u32,

    /// Number of columns.
    cols: u32,

    /// Whether the edges wrap around.
    toroidal: bool,

    /// The cells, row-major. `true` is live.
    cells: Vec<bool>,
}

impl Universe {
    /// Creates a universe with all cells dead.
    pub fn new(rows: u32, cols: u32, toroidal: bool) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Self {
            rows,
            cols,
            toroidal,
            cells: vec![false; rows as usize * cols as usize],
        })
    }

    /// A dead universe with the same dimensions and topology.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            toroidal: self.toroidal,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Whether the edges wrap around.
    #[inline]
    pub const fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    #[inline]
    fn index(&self, r: u32, c: u32) -> usize {
        r as usize * self.cols as usize + c as usize
    }

    /// The state of the cell at `(r, c)`.
    ///
    /// Out-of-range coordinates read as dead. This keeps the census loop
    /// free of bounds branches at the edges of a bounded universe; callers
    /// must not rely on it for anything else.
    #[inline]
    pub fn get(&self, r: u32, c: u32) -> bool {
        if r >= self.rows || c >= self.cols {
            return false;
        }
        self.cells[self.index(r, c)]
    }

    /// Brings the cell at `(r, c)` to life.
    ///
    /// Unlike [`get`](Self::get), the write path is strict: the caller
    /// guarantees that the coordinates are in range.
    #[inline]
    pub fn set_alive(&mut self, r: u32, c: u32) {
        debug_assert!(r < self.rows && c < self.cols);
        let i = self.index(r, c);
        self.cells[i] = true;
    }

    /// Kills the cell at `(r, c)`.
    ///
    /// The caller guarantees that the coordinates are in range.
    #[inline]
    pub fn set_dead(&mut self, r: u32, c: u32) {
        debug_assert!(r < self.rows && c < self.cols);
        let i = self.index(r, c);
        self.cells[i] = false;
    }

    /// Brings every cell in `pairs` to life.
    ///
    /// Stops at the first out-of-range pair and reports it. Cells set
    /// before the failing pair keep their new state.
    pub fn populate<I>(&mut self, pairs: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        for (r, c) in pairs {
            if r >= self.rows || c >= self.cols {
                return Err(Error::OutOfBounds((r, c)));
            }
            self.set_alive(r, c);
        }
        Ok(())
    }

    /// Counts the live cells among the 8 neighbors of `(r, c)`.
    ///
    /// The cell itself is never counted. On a bounded universe, neighbor
    /// positions outside the grid count as dead, so a corner cell sees at
    /// most 3 live neighbors and an edge cell at most 5. On a toroidal
    /// universe every offset wraps to the opposite edge, so all 8
    /// candidate positions are inspected for every cell.
    pub fn census(&self, r: u32, c: u32) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let alive = if self.toroidal {
                let nr = (i64::from(r) + i64::from(dr)).rem_euclid(i64::from(self.rows));
                let nc = (i64::from(c) + i64::from(dc)).rem_euclid(i64::from(self.cols));
                self.get(nr as u32, nc as u32)
            } else {
                match (r.checked_add_signed(dr), c.checked_add_signed(dc)) {
                    (Some(nr), Some(nc)) => self.get(nr, nc),
                    _ => false,
                }
            };
            if alive {
                count += 1;
            }
        }
        count
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates over the coordinates of all live cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| ((i / cols) as u32, (i % cols) as u32))
    }
}

/// Displays the universe as `rows` lines of `cols` characters.
///
/// * **Live** cells are represented by `o`;
/// * **Dead** cells are represented by `.`.
impl Display for Universe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                f.write_char(if self.get(r, c) { 'o' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
