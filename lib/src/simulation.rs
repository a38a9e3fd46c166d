//! The simulation driver: double-buffered generation stepping.

use crate::universe::Universe;
use std::mem;

/// Drives a universe through generations of the standard B3/S23 rule.
///
/// Owns two buffers of identical dimensions. A step reads every cell of
/// the current buffer and writes its fate into the other one, then the
/// buffers exchange roles. The swap exchanges the backing storage, so
/// committing a generation costs O(1) and no cell data is ever copied.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The universe holding the current generation.
    current: Universe,

    /// The scratch buffer the next generation is written into.
    next: Universe,

    /// Number of generations stepped so far.
    generation: u64,
}

impl Simulation {
    /// Wraps a populated universe, allocating the second buffer.
    pub fn new(universe: Universe) -> Self {
        let next = universe.empty_like();
        Self {
            current: universe,
            next,
            generation: 0,
        }
    }

    /// The universe holding the current generation.
    #[inline]
    pub const fn universe(&self) -> &Universe {
        &self.current
    }

    /// Number of generations stepped so far.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the simulation by one generation.
    ///
    /// Every cell's fate is decided from the current buffer and written
    /// into the other one; the current buffer is untouched until the
    /// buffers swap at the end of the pass, so neighbor counts never mix
    /// two generations.
    pub fn step(&mut self) {
        for r in 0..self.current.rows() {
            for c in 0..self.current.cols() {
                let count = self.current.census(r, c);
                let alive = self.current.get(r, c);
                // Survival on 2 or 3 neighbors, birth on exactly 3.
                if matches!((alive, count), (true, 2 | 3) | (false, 3)) {
                    self.next.set_alive(r, c);
                } else {
                    self.next.set_dead(r, c);
                }
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Runs a fixed number of generations.
    ///
    /// There is no convergence detection; the loop always runs to the end.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Runs a fixed number of generations, showing each one to `observer`
    /// before it is evolved.
    ///
    /// The observer only gets a shared view of the current buffer, and an
    /// error from it stops the run.
    pub fn run_with<F, E>(&mut self, generations: u64, mut observer: F) -> Result<(), E>
    where
        F: FnMut(&Universe, u64) -> Result<(), E>,
    {
        for _ in 0..generations {
            observer(&self.current, self.generation)?;
            self.step();
        }
        Ok(())
    }
}
