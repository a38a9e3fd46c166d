//! Run configuration.

use crate::{error::Error, pattern::Pattern, simulation::Simulation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run configuration.
///
/// The simulation will be generated from this configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Whether grid edges wrap to the opposite side for neighbor counting.
    pub toroidal: bool,

    /// Number of generations to simulate.
    pub generations: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toroidal: false,
            generations: 100,
        }
    }
}

impl Config {
    /// Creates a new configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topology.
    #[must_use]
    pub const fn set_toroidal(mut self, toroidal: bool) -> Self {
        self.toroidal = toroidal;
        self
    }

    /// Sets the number of generations.
    #[must_use]
    pub const fn set_generations(mut self, generations: u64) -> Self {
        self.generations = generations;
        self
    }

    /// Creates a simulation from an initial pattern.
    ///
    /// Fails if the pattern's dimensions are zero or any of its cells is
    /// out of range.
    pub fn simulation(&self, pattern: &Pattern) -> Result<Simulation, Error> {
        let universe = pattern.universe(self.toroidal)?;
        Ok(Simulation::new(universe))
    }
}
