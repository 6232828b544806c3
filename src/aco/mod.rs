//! Ant Colony Optimization (ACO) for the Traveling Salesman Problem.
//!
//! A colony of agents, one per starting vertex, builds tours by
//! roulette-wheel selection weighted by pheromone trails and inverse edge
//! length. After every round the trails on each agent's edges are
//! evaporated and reinforced in proportion to `q / tour_distance`. Several
//! colonies restart the trails from scratch; the best tour across all of
//! them is the result.
//!
//! Rounds run either sequentially or with one rayon task per agent. In the
//! concurrent case the pheromone field is shared read-only, and it is only
//! updated after every agent of the round has finished.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stutzle (2004), *Ant Colony Optimization*, MIT Press

mod ant;
mod colony;
mod config;
mod pheromone;
mod runner;
mod types;

pub use ant::Ant;
pub use colony::{ColonyRound, RoundMode};
pub use config::AcoConfig;
pub use pheromone::PheromoneField;
pub use runner::AntAlgorithm;
pub use types::{Tour, TourResult};
