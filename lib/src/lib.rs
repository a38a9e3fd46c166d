mod config;
mod error;
mod pattern;
mod simulation;
mod universe;

pub use config::Config;
pub use error::Error;
pub use pattern::Pattern;
pub use simulation::Simulation;
pub use universe::{Coord, Universe};
